use engine::tokenizer::tokenize;

#[test]
fn unigrams_then_bigrams_then_trigrams() {
    let terms = tokenize("the cat sat");
    assert_eq!(
        terms,
        vec!["the", "cat", "sat", "the cat", "cat sat", "the cat sat"]
    );
}

#[test]
fn it_lowercases_and_strips_punctuation() {
    let terms = tokenize("After the medication, headache!");
    assert_eq!(terms[..4], ["after", "the", "medication", "headache"]);
    assert!(terms.contains(&"the medication".to_string()));
}

#[test]
fn underscores_and_digits_survive() {
    let terms = tokenize("dose_mg is 50");
    assert_eq!(terms[..3], ["dose_mg", "is", "50"]);
}

#[test]
fn short_inputs_produce_no_ngrams() {
    assert_eq!(tokenize("dizziness"), vec!["dizziness"]);
    assert_eq!(tokenize("no dizziness"), vec!["no", "dizziness", "no dizziness"]);
}

#[test]
fn empty_input_produces_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n").is_empty());
}

#[test]
fn same_input_same_output() {
    let text = "The patient reported nausea and dizziness caused by the medication.";
    assert_eq!(tokenize(text), tokenize(text));
}
