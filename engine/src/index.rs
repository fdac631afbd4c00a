use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TermId = u32;
pub type DocId = u32;

/// A corpus document. Ids are 1-based and assigned in ingestion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub weight: f32, // tf-idf weight of the term in this document
}

/// All distinct terms seen during one index build.
///
/// Ids start at 1 and follow first-seen order across the corpus; an id never
/// changes once assigned. Document frequencies are accumulated by the builder,
/// at most once per document containing the term.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>, // terms[id - 1] is the term for id
    df: Vec<u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `term`, assigning the next id if unseen.
    pub fn intern(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.dictionary.get(term) {
            return id;
        }
        let id = (self.terms.len() + 1) as TermId;
        self.dictionary.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        self.df.push(0);
        id
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.dictionary.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        let idx = (id as usize).checked_sub(1)?;
        self.terms.get(idx).map(|t| t.as_str())
    }

    pub(crate) fn bump_df(&mut self, id: TermId) {
        if let Some(df) = (id as usize).checked_sub(1).and_then(|i| self.df.get_mut(i)) {
            *df += 1;
        }
    }

    /// Number of documents containing the term at least once.
    pub fn document_frequency(&self, id: TermId) -> u32 {
        (id as usize)
            .checked_sub(1)
            .and_then(|i| self.df.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Document frequency looked up by surface term, 0 if unseen.
    pub fn document_frequency_of(&self, term: &str) -> u32 {
        self.term_id(term)
            .map_or(0, |id| self.document_frequency(id))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate terms in id order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, TermId)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), (i + 1) as TermId))
    }
}
