//! Benchmarks for parsing, graph construction and analytics

use criterion::{Criterion, criterion_group, criterion_main};
use notegraph::prelude::*;
use std::hint::black_box;

/// Ring of notes, each linking to the next two and one missing target
fn synthetic_corpus(size: usize) -> MemoryCorpus {
    let mut corpus = MemoryCorpus::new();
    for i in 0..size {
        let content = format!(
            "# Note {i}\n\n[next]({}.md) [skip]({}.md) [gone](missing-{i}.md)\n## Details\n",
            (i + 1) % size,
            (i + 2) % size,
        );
        corpus.insert(format!("{i}.md"), content);
    }
    corpus
}

fn bench_parse(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000);
    c.bench_function("parse_corpus_1000", |b| {
        b.iter(|| Parser::default().parse_corpus(black_box(&corpus)))
    });
}

fn bench_build_and_analyze(c: &mut Criterion) {
    let notes = Parser::default().parse_corpus(&synthetic_corpus(1_000));

    c.bench_function("build_graph_1000", |b| {
        b.iter(|| NoteGraph::build(black_box(&notes)))
    });

    let graph = NoteGraph::build(&notes);
    c.bench_function("analysis_report_1000", |b| {
        b.iter(|| AnalysisReport::analyze(black_box(&notes), black_box(&graph), 5))
    });
    c.bench_function("shortest_path_1000", |b| {
        b.iter(|| shortest_path(black_box(&graph), "0.md", "999.md"))
    });
}

criterion_group!(benches, bench_parse, bench_build_and_analyze);
criterion_main!(benches);
