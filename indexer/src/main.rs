use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::{build_index, EngineError, IndexMeta, IndexStore, SledStore};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a TF-IDF inverted index from a text corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a corpus file or directory
    Build {
        /// Input path: a JSON array of strings, a JSONL file of strings, a
        /// plain text file with one document per line, or a directory of
        /// .txt files (one document per file, sorted by path)
        #[arg(long)]
        input: String,
        /// Output index directory
        #[arg(long)]
        output: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => build(&input, &output),
    }
}

fn build(input: &str, output: &str) -> Result<()> {
    let corpus = load_corpus(Path::new(input))?;
    tracing::info!(num_docs = corpus.len(), input, "corpus loaded");

    let store =
        SledStore::open(output).with_context(|| format!("opening index store at {output}"))?;
    let vocab = build_index(&corpus, &store)?;

    let meta = IndexMeta {
        num_docs: corpus.len() as u32,
        created_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        version: 1,
    };
    store.put_meta(&meta)?;
    store.flush()?;

    tracing::info!(output, num_terms = vocab.len(), "index build complete");
    Ok(())
}

/// Load the ordered corpus. Document ids are assigned by 1-based position in
/// the returned sequence.
fn load_corpus(path: &Path) -> Result<Vec<String>> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
            .map(|e| e.into_path())
            .collect();
        files.sort();
        let mut corpus = Vec::with_capacity(files.len());
        for file in files {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            if !text.trim().is_empty() {
                corpus.push(text);
            }
        }
        return Ok(corpus);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let corpus: Vec<String> = serde_json::from_str(&data).map_err(|e| {
                EngineError::MalformedInput(format!(
                    "{} is not a JSON array of strings: {e}",
                    path.display()
                ))
            })?;
            Ok(corpus)
        }
        Some("jsonl") => {
            let mut corpus = Vec::new();
            for line in data.lines().filter(|l| !l.trim().is_empty()) {
                let doc: String = serde_json::from_str(line).map_err(|e| {
                    EngineError::MalformedInput(format!(
                        "bad JSONL line in {}: {e}",
                        path.display()
                    ))
                })?;
                corpus.push(doc);
            }
            Ok(corpus)
        }
        _ => Ok(data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()),
    }
}
