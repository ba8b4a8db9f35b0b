use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use foliotui::content::EXPERIENCE;
use foliotui::text::wrap_words;

fn benchmark(c: &mut Criterion) {
    let paragraph = EXPERIENCE
        .iter()
        .flat_map(|entry| entry.highlights.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    c.bench_function("wrap-words-40", |b| {
        b.iter(|| wrap_words(black_box(&paragraph), black_box(40)))
    });

    c.bench_function("wrap-words-100", |b| {
        b.iter(|| wrap_words(black_box(&paragraph), black_box(100)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
