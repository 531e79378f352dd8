//! Criterion benchmarks for Saturi.
//!
//! Covers the similarity metrics, single-word matching against dictionaries
//! of increasing size, and whole-sentence conversion.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use saturi::dictionary::{DialectEntry, DialectIndex};
use saturi::matching::levenshtein::levenshtein_similarity;
use saturi::matching::similarity::sequence_ratio_chars;
use saturi::matching::{FuzzyMatcher, SimilarityMetric, WordMatcher};
use saturi::normalize::SentenceConverter;
use std::hint::black_box;

const SYLLABLES: [&str; 24] = [
    "가", "거", "고", "구", "나", "노", "데", "라", "리", "마", "머", "모", "부", "사", "시", "아",
    "오", "이", "정", "지", "카", "캐", "하", "허",
];

const REGIONS: [&str; 5] = ["경상", "전라", "충청", "강원", "제주"];

/// Generate a dictionary of synthetic dialect terms.
fn generate_index(count: usize) -> DialectIndex {
    let entries = (0..count).map(|i| {
        let length = 2 + i % 3;
        let dialect: String = (0..length)
            .map(|j| SYLLABLES[(i * 7 + j * 13 + i / SYLLABLES.len()) % SYLLABLES.len()])
            .collect::<String>()
            + &i.to_string();
        DialectEntry::new(
            dialect,
            format!("표준{i}"),
            Some(REGIONS[i % REGIONS.len()].to_string()),
        )
    });
    DialectIndex::from_entries(entries)
}

/// Generate sentences mixing known terms, near misses and unknown words.
fn generate_sentences(index: &DialectIndex, count: usize) -> Vec<String> {
    let entries = index.entries();
    (0..count)
        .map(|i| {
            (0..8)
                .map(|j| {
                    let entry = &entries[(i * 31 + j * 17) % entries.len()];
                    match j % 3 {
                        0 => entry.dialect.clone(),
                        1 => entry.dialect.chars().skip(1).collect(),
                        _ => "컴퓨터".to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark the raw similarity metrics.
fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    let a: Vec<char> = "머라카노".chars().collect();
    let b: Vec<char> = "머라카나".chars().collect();

    group.bench_function("sequence_ratio", |bench| {
        bench.iter(|| black_box(sequence_ratio_chars(black_box(&a), black_box(&b))))
    });

    group.bench_function("levenshtein_similarity", |bench| {
        bench.iter(|| black_box(levenshtein_similarity(black_box(&a), black_box(&b))))
    });

    group.finish();
}

/// Benchmark single-word matching as the dictionary grows.
fn bench_word_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_matching");

    for size in [1_000, 10_000, 50_000] {
        let index = generate_index(size);
        let sequential = FuzzyMatcher::new().with_parallel_threshold(usize::MAX);
        let parallel = FuzzyMatcher::new().with_parallel_threshold(0);
        let levenshtein = FuzzyMatcher::new()
            .with_metric(SimilarityMetric::Levenshtein)
            .with_parallel_threshold(usize::MAX);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &index, |b, index| {
            b.iter(|| black_box(sequential.best_match(black_box("머라카나"), index)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &index, |b, index| {
            b.iter(|| black_box(parallel.best_match(black_box("머라카나"), index)))
        });
        group.bench_with_input(BenchmarkId::new("levenshtein", size), &index, |b, index| {
            b.iter(|| black_box(levenshtein.best_match(black_box("머라카나"), index)))
        });
    }

    group.finish();
}

/// Benchmark whole-sentence conversion.
fn bench_sentence_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentence_conversion");
    group.sample_size(20);

    let index = generate_index(10_000);
    let matcher = FuzzyMatcher::new();
    let sentences = generate_sentences(&index, 100);

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("convert_batch", |b| {
        let converter = SentenceConverter::new(&index, &matcher);
        b.iter(|| {
            for sentence in &sentences {
                black_box(converter.convert(black_box(sentence)));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_similarity,
    bench_word_matching,
    bench_sentence_conversion
);

criterion_main!(benches);
