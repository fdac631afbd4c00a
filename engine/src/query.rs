use crate::error::Result;
use crate::index::DocId;
use crate::store::IndexStore;
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One ranked query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f32,
}

/// Score `query` against the index held by `store`.
///
/// The query goes through the same tokenizer as the corpus, n-gram expansion
/// included. Every token occurrence contributes the full posting weight of
/// its term, so a repeated term counts once per repetition. Terms unknown to
/// the index contribute nothing and are not an error. Documents matching no
/// query term are omitted; a match with weight 0 still counts as a match.
/// Hits are ordered by score descending, ties broken by doc id ascending.
pub fn score_query<S: IndexStore>(query: &str, store: &S) -> Result<Vec<SearchHit>> {
    let tokens = tokenize(query);
    tracing::debug!(%query, tokens = tokens.len(), "scoring query");

    let mut scores: HashMap<DocId, f32> = HashMap::new();
    for term in &tokens {
        for posting in store.get_postings(term)? {
            *scores.entry(posting.doc_id).or_insert(0.0) += posting.weight;
        }
    }

    let mut hits: Vec<SearchHit> = scores
        .into_iter()
        .map(|(doc_id, score)| SearchHit { doc_id, score })
        .collect();
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    Ok(hits)
}
