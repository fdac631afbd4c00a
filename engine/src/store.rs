use crate::error::Result;
use crate::index::{DocId, Document, Posting};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Index-level metadata recorded at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexMeta {
    pub num_docs: u32,
    pub created_at: String,
    pub version: u32,
}

/// Storage boundary for documents and the inverted index.
///
/// Any mapping-backed store satisfies this contract. Postings are keyed by
/// the surface term; `upsert_posting` overwrites the entry for a
/// (term, document) pair rather than appending a duplicate, and postings
/// lists stay sorted by doc id.
pub trait IndexStore {
    fn put_document(&self, doc: &Document) -> Result<()>;
    fn get_document(&self, id: DocId) -> Result<Option<Document>>;
    fn upsert_posting(&self, term: &str, doc_id: DocId, weight: f32) -> Result<()>;
    /// Postings for a term. Unknown terms yield an empty list, not an error.
    fn get_postings(&self, term: &str) -> Result<Vec<Posting>>;
    fn put_meta(&self, meta: &IndexMeta) -> Result<()>;
    fn get_meta(&self) -> Result<Option<IndexMeta>>;
    /// Drop all documents, postings, and metadata ahead of a full rebuild.
    fn clear(&self) -> Result<()>;
}

fn upsert(postings: &mut Vec<Posting>, doc_id: DocId, weight: f32) {
    match postings.binary_search_by_key(&doc_id, |p| p.doc_id) {
        Ok(i) => postings[i].weight = weight,
        Err(i) => postings.insert(i, Posting { doc_id, weight }),
    }
}

/// In-memory store. Safe for any number of concurrent readers once the build
/// has finished; a rebuild must not run while queries are in flight.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    docs: HashMap<DocId, Document>,
    postings: HashMap<String, Vec<Posting>>,
    meta: Option<IndexMeta>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexStore for MemoryStore {
    fn put_document(&self, doc: &Document) -> Result<()> {
        self.inner.write().docs.insert(doc.id, doc.clone());
        Ok(())
    }

    fn get_document(&self, id: DocId) -> Result<Option<Document>> {
        Ok(self.inner.read().docs.get(&id).cloned())
    }

    fn upsert_posting(&self, term: &str, doc_id: DocId, weight: f32) -> Result<()> {
        let mut inner = self.inner.write();
        let list = inner.postings.entry(term.to_string()).or_default();
        upsert(list, doc_id, weight);
        Ok(())
    }

    fn get_postings(&self, term: &str) -> Result<Vec<Posting>> {
        Ok(self
            .inner
            .read()
            .postings
            .get(term)
            .cloned()
            .unwrap_or_default())
    }

    fn put_meta(&self, meta: &IndexMeta) -> Result<()> {
        self.inner.write().meta = Some(meta.clone());
        Ok(())
    }

    fn get_meta(&self) -> Result<Option<IndexMeta>> {
        Ok(self.inner.read().meta.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.inner.write();
        inner.docs.clear();
        inner.postings.clear();
        inner.meta = None;
        Ok(())
    }
}

const META_KEY: &[u8] = b"meta";

/// Sled-backed store: documents and postings in separate trees as bincode,
/// metadata as JSON under a fixed key in the default tree.
pub struct SledStore {
    db: sled::Db,
    docs: sled::Tree,
    postings: sled::Tree,
}

impl SledStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        let docs = db.open_tree("docs")?;
        let postings = db.open_tree("postings")?;
        Ok(Self { db, docs, postings })
    }

    /// Flush dirty buffers to disk.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl IndexStore for SledStore {
    fn put_document(&self, doc: &Document) -> Result<()> {
        let bytes = bincode::serialize(doc)?;
        self.docs.insert(doc.id.to_be_bytes(), bytes)?;
        Ok(())
    }

    fn get_document(&self, id: DocId) -> Result<Option<Document>> {
        match self.docs.get(id.to_be_bytes())? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn upsert_posting(&self, term: &str, doc_id: DocId, weight: f32) -> Result<()> {
        let mut list = self.get_postings(term)?;
        upsert(&mut list, doc_id, weight);
        let bytes = bincode::serialize(&list)?;
        self.postings.insert(term.as_bytes(), bytes)?;
        Ok(())
    }

    fn get_postings(&self, term: &str) -> Result<Vec<Posting>> {
        match self.postings.get(term.as_bytes())? {
            Some(bytes) => Ok(bincode::deserialize(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn put_meta(&self, meta: &IndexMeta) -> Result<()> {
        let json = serde_json::to_vec(meta)?;
        self.db.insert(META_KEY, json)?;
        Ok(())
    }

    fn get_meta(&self) -> Result<Option<IndexMeta>> {
        match self.db.get(META_KEY)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        self.docs.clear()?;
        self.postings.clear()?;
        self.db.remove(META_KEY)?;
        Ok(())
    }
}
