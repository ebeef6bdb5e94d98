use criterion::{criterion_group, criterion_main, Criterion};
use search_core::SearchEngine;

const WORDS: &[&str] = &[
    "white", "cat", "fashionable", "collar", "fluffy", "tail", "groomed", "dog", "expressive", "eyes",
    "starling", "evgeny", "a", "and", "in", "the",
];

fn corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| (0..12).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect::<Vec<_>>().join(" "))
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let docs = corpus(1_000);
    c.bench_function("index_1k_docs", |b| b.iter(|| SearchEngine::from_corpus("a and in the", &docs)));
    let engine = SearchEngine::from_corpus("a and in the", &docs).expect("corpus fits in the index");
    c.bench_function("search_1k_docs", |b| b.iter(|| engine.search("fluffy groomed cat -collar")));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
