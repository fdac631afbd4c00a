use criterion::{criterion_group, criterion_main, Criterion};
use engine::tokenizer::tokenize;

fn bench_tokenize(c: &mut Criterion) {
    let text =
        "After the medication, headache and nausea were reported by the patient. ".repeat(64);
    c.bench_function("tokenize_corpus_doc", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
