use core_text::Buffer;
use core_text::search::{replace_all, search_all};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_buffer() -> Buffer {
    let line = "the quick brown fox jumps over the lazy dog; aaaa bbbb aaaa";
    Buffer::from_lines(std::iter::repeat_n(line, 2_000))
}

fn bench_search(c: &mut Criterion) {
    let buf = sample_buffer();
    c.bench_function("search_all_overlapping", |b| {
        b.iter(|| search_all(black_box(&buf), black_box("aa")))
    });
    c.bench_function("search_all_sparse", |b| {
        b.iter(|| search_all(black_box(&buf), black_box("lazy")))
    });
}

fn bench_replace(c: &mut Criterion) {
    let buf = sample_buffer();
    c.bench_function("replace_all_fox", |b| {
        b.iter_batched(
            || buf.clone(),
            |mut work| replace_all(&mut work, "fox", "cat"),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_search, bench_replace);
criterion_main!(benches);
