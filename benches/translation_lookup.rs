// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for translation lookups.
//!
//! Measures the performance of:
//! - Hits against a loaded table
//! - Repeated misses (after the first one is recorded)
//! - Placeholder substitution

use criterion::{criterion_group, criterion_main, Criterion};
use lng_locale::{TranslationMap, Translator};
use std::hint::black_box;

fn sample_translator() -> Translator {
    let map: TranslationMap = (0..1_000)
        .map(|i| (format!("key {i}"), format!("value {i} with {{1}} and {{2}}")))
        .collect();
    let mut translator = Translator::new();
    translator.set_translation_map(map);
    translator
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation_lookup");
    let mut translator = sample_translator();

    group.bench_function("hit", |b| {
        b.iter(|| {
            black_box(translator.get_text(black_box("key 500")).len());
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            black_box(translator.get_text(black_box("not translated")).len());
        });
    });

    group.bench_function("placeholders", |b| {
        b.iter(|| {
            black_box(translator.get_text_with(black_box("key 42"), &["first", "second"]));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
