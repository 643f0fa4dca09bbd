//! Benchmarks for catalog ranking and highlighting.

use cellar_search::{highlight_query, rank_suggestions, search, similarity, HighlightOptions, SearchOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

const NAMES: &[(&str, &str, &str)] = &[
    ("波爾多紅酒", "Bordeaux Red", "Bordeaux"),
    ("勃根地白酒", "Burgundy White", "Burgundy"),
    ("作品一號", "Opus One", "Napa Valley"),
    ("香檳", "Champagne", "Champagne"),
    ("瑪歌酒莊", "Château Margaux", "Margaux"),
    ("夏布利", "Chablis", "Burgundy"),
];

fn create_catalog(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let (zh, en, region) = NAMES[i % NAMES.len()];
            json!({
                "id": i,
                "nameZh": format!("{zh} {}", 2000 + i % 24),
                "nameEn": format!("{en} {}", 2000 + i % 24),
                "region": region,
            })
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity_short", |b| {
        b.iter(|| similarity(black_box("Chardonnay"), black_box("chardonay")))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let fields = ["nameZh", "nameEn", "region"];

    for size in [10, 50, 100, 200].iter() {
        let items = create_catalog(*size);
        let opts = SearchOptions::default();

        group.bench_with_input(BenchmarkId::new("contains", size), size, |b, _| {
            b.iter(|| search(black_box(&items), black_box("bordeaux"), &fields, &opts))
        });

        group.bench_with_input(BenchmarkId::new("typo", size), size, |b, _| {
            b.iter(|| search(black_box(&items), black_box("chardonay"), &fields, &opts))
        });
    }

    group.finish();
}

fn bench_suggestions(c: &mut Criterion) {
    let items = create_catalog(100);

    c.bench_function("rank_suggestions_100", |b| {
        b.iter(|| rank_suggestions(black_box(&items), black_box("opus"), Some(10)))
    });
}

fn bench_highlight(c: &mut Criterion) {
    let opts = HighlightOptions::default();

    c.bench_function("highlight_query", |b| {
        b.iter(|| highlight_query(black_box("Château Margaux Grand Vin 2015"), black_box("margaux vin"), &opts))
    });
}

criterion_group!(
    benches,
    bench_similarity,
    bench_search,
    bench_suggestions,
    bench_highlight
);
criterion_main!(benches);
