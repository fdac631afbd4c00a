use crate::error::Result;
use crate::index::{DocId, Document, Vocabulary};
use crate::store::IndexStore;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

/// Build the inverted index for `corpus`, writing documents and tf-idf
/// postings through `store`. Document ids are assigned by 1-based position
/// in the corpus.
///
/// The store is cleared first: a changed corpus always means a full rebuild,
/// and the resulting index is read-only at query time. An empty corpus
/// builds an empty vocabulary and index.
pub fn build_index<S: IndexStore>(corpus: &[String], store: &S) -> Result<Vocabulary> {
    store.clear()?;

    let num_docs = corpus.len() as u32;
    let mut vocab = Vocabulary::new();

    // Tokenize every document once, interning terms in token order so ids
    // follow first-seen order, counting in-document occurrences, and bumping
    // each term's document frequency on its first occurrence in a document.
    let mut doc_counts: Vec<HashMap<String, u32>> = Vec::with_capacity(corpus.len());
    for content in corpus {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for term in tokenize(content) {
            let id = vocab.intern(&term);
            let count = counts.entry(term).or_insert(0);
            *count += 1;
            if *count == 1 {
                vocab.bump_df(id);
            }
        }
        doc_counts.push(counts);
    }

    // Weight each (term, document) pair and upsert its posting. A term that
    // appears in every document gets idf 0 and is stored with weight 0.
    for (pos, counts) in doc_counts.iter().enumerate() {
        let doc_id = (pos + 1) as DocId;
        store.put_document(&Document {
            id: doc_id,
            content: corpus[pos].clone(),
        })?;
        for (term, &count) in counts {
            let tf = 1.0 + (count as f32).ln();
            let df = vocab.document_frequency_of(term).max(1);
            let idf = ((num_docs as f32) / (df as f32)).ln();
            store.upsert_posting(term, doc_id, tf * idf)?;
        }
        tracing::debug!(doc_id, distinct_terms = counts.len(), "indexed document");
    }

    tracing::info!(num_docs, num_terms = vocab.len(), "index build complete");
    Ok(vocab)
}
