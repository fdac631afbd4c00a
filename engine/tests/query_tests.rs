use engine::{build_index, score_query, DocId, MemoryStore};

fn corpus() -> Vec<String> {
    [
        "After the medication, headache and nausea were reported by the patient.",
        "The patient reported nausea and dizziness caused by the medication.",
        "Headache and dizziness are common effects of this medication.",
        "The medication caused a headache and nausea, but no dizziness was reported.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{a} != {b}");
}

#[test]
fn dizziness_ranks_matching_documents_and_excludes_the_rest() {
    let store = MemoryStore::new();
    build_index(&corpus(), &store).unwrap();
    let hits = score_query("dizziness", &store).unwrap();
    let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
    // Docs 2, 3, 4 contain the term once each; equal scores fall back to
    // doc id order. Doc 1 has no posting and never appears.
    assert_eq!(ids, vec![2, 3, 4]);
    let expected = (4.0f32 / 3.0).ln();
    for hit in &hits {
        assert_close(hit.score, expected);
    }
}

#[test]
fn multi_term_query_aggregates_unigrams_and_ngrams() {
    let store = MemoryStore::new();
    build_index(&corpus(), &store).unwrap();
    let hits = score_query("nausea and dizziness", &store).unwrap();
    let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);
    // Doc 2 contains the full phrase, so the bigram "nausea and", the bigram
    // "and dizziness", and the trigram all contribute on top of the unigrams.
    let expected =
        2.0 * (4.0f32 / 3.0).ln() + 2.0 * 4.0f32.ln() + 2.0f32.ln();
    assert_close(hits[0].score, expected);
}

#[test]
fn repeated_query_terms_double_count() {
    let store = MemoryStore::new();
    build_index(&corpus(), &store).unwrap();
    let once = score_query("dizziness", &store).unwrap();
    let twice = score_query("dizziness dizziness", &store).unwrap();
    // The repeated query also emits an unindexed bigram, which contributes
    // nothing, so every score exactly doubles.
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(&twice) {
        assert_eq!(a.doc_id, b.doc_id);
        assert_close(b.score, 2.0 * a.score);
    }
}

#[test]
fn terms_in_every_document_still_match_with_zero_weight() {
    let store = MemoryStore::new();
    build_index(&corpus(), &store).unwrap();
    let hits = score_query("medication", &store).unwrap();
    let ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    for hit in hits {
        assert_close(hit.score, 0.0);
    }
}

#[test]
fn effects_matches_only_the_document_containing_it() {
    let store = MemoryStore::new();
    build_index(&corpus(), &store).unwrap();
    let hits = score_query("effects", &store).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, 3);
    assert_close(hits[0].score, 4.0f32.ln());
}

#[test]
fn unknown_terms_yield_empty_results() {
    let store = MemoryStore::new();
    build_index(&corpus(), &store).unwrap();
    assert!(score_query("zyzzyva", &store).unwrap().is_empty());
    assert!(score_query("", &store).unwrap().is_empty());
}

#[test]
fn querying_an_empty_index_is_not_an_error() {
    let store = MemoryStore::new();
    build_index(&[], &store).unwrap();
    assert!(score_query("dizziness", &store).unwrap().is_empty());
}
