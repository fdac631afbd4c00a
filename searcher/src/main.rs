use anyhow::{Context, Result};
use clap::Parser;
use engine::{score_query, DocId, IndexStore, SledStore};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Run ranked TF-IDF queries against a built index", long_about = None)]
struct Cli {
    /// Index directory produced by the indexer
    #[arg(long)]
    index: String,
    /// Emit results as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Queries to run, in order
    #[arg(required = true)]
    queries: Vec<String>,
}

#[derive(Serialize)]
struct QueryResult {
    query: String,
    results: Vec<RankedDoc>,
}

#[derive(Serialize)]
struct RankedDoc {
    doc_id: DocId,
    score: f32,
    content: String,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let store = SledStore::open(&cli.index)
        .with_context(|| format!("opening index at {}", cli.index))?;
    if let Some(meta) = store.get_meta()? {
        tracing::info!(num_docs = meta.num_docs, created_at = %meta.created_at, "index loaded");
    }

    for (pos, query) in cli.queries.iter().enumerate() {
        let hits = score_query(query, &store)?;
        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let doc = store
                .get_document(hit.doc_id)?
                .with_context(|| format!("document {} missing from store", hit.doc_id))?;
            results.push(RankedDoc {
                doc_id: hit.doc_id,
                score: hit.score,
                content: doc.content,
            });
        }

        if cli.json {
            let out = QueryResult {
                query: query.clone(),
                results,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("\nResults for Query {}:", pos + 1);
            for doc in &results {
                println!(
                    "Document: {} | Relevance Score: {:.3}",
                    doc.content, doc.score
                );
            }
        }
    }
    Ok(())
}
