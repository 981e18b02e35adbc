use criterion::{criterion_group, criterion_main, Criterion};
use ducet::Collator;

const SAMPLE_WORDS: &[&str] = &[
    "apple", "Apple", "banana", "café", "cafe\u{0301}", "caff", "Äpfel", "Apfelbaum", "zebra",
    "\u{4E2D}\u{6587}", "Θεός", "Москва",
];

fn sort_key_throughput(c: &mut Criterion) {
    let collator = Collator::default_variant().unwrap();
    c.bench_function("sort_key over a mixed-script word list", |b| {
        b.iter(|| {
            for word in SAMPLE_WORDS {
                criterion::black_box(collator.sort_key(word));
            }
        })
    });
}

fn sort_throughput(c: &mut Criterion) {
    let collator = Collator::default_variant().unwrap();
    c.bench_function("stable sort of a mixed-script word list", |b| {
        b.iter(|| {
            let words = collator.sort(SAMPLE_WORDS.iter().copied());
            criterion::black_box(words);
        })
    });
}

fn table_load(c: &mut Criterion) {
    c.bench_function("loading the bundled DUCET table", |b| {
        b.iter(|| criterion::black_box(Collator::default_variant().unwrap()));
    });
}

criterion_group!(benches, sort_key_throughput, sort_throughput, table_load);
criterion_main!(benches);
