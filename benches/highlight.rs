//! Highlight pipeline performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nbyte_highlighter::highlight::SAMPLE_INPUT;
use nbyte_highlighter::render::render_to_string;
use nbyte_highlighter::unicode::{code_point_lengths, graphemes};
use nbyte_highlighter::{AnsiRenderer, ColorMode, HtmlRenderer, Selection, classify, highlight};
use std::hint::black_box;

fn classify_clusters(c: &mut Criterion) {
    c.bench_function("classify_ascii", |b| {
        b.iter(|| classify(black_box("A")));
    });

    c.bench_function("classify_zwj_emoji", |b| {
        b.iter(|| classify(black_box("\u{1F647}\u{1F3FC}\u{200D}\u{2640}\u{FE0F}")));
    });

    c.bench_function("code_point_lengths_sample", |b| {
        b.iter(|| code_point_lengths(black_box(SAMPLE_INPUT)).count());
    });
}

fn segment_text(c: &mut Criterion) {
    c.bench_function("graphemes_sample", |b| {
        b.iter(|| graphemes(black_box(SAMPLE_INPUT)).count());
    });
}

fn highlight_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    let inputs = [
        ("ascii", "The quick brown fox jumps over the lazy dog. ".repeat(100)),
        ("kana", "\u{3053}\u{308C}\u{306F}\u{30C6}\u{30B9}\u{30C8}".repeat(200)),
        ("emoji", "\u{1F64F}\u{1F3FB}\u{1F647}\u{1F3FC}\u{200D}\u{2640}\u{FE0F}".repeat(100)),
        ("sample", SAMPLE_INPUT.repeat(10)),
    ];

    for (name, text) in &inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| highlight(black_box(text), &Selection::all()));
        });
    }
    group.finish();
}

fn render_outputs(c: &mut Criterion) {
    let result = highlight(SAMPLE_INPUT, &Selection::all()).expect("sample highlights");

    c.bench_function("render_ansi_truecolor", |b| {
        b.iter(|| {
            render_to_string(
                |buf| AnsiRenderer::with_color_mode(buf, ColorMode::TrueColor),
                black_box(&result),
            )
        });
    });

    c.bench_function("render_html", |b| {
        b.iter(|| render_to_string(HtmlRenderer::new, black_box(&result)));
    });
}

criterion_group!(
    benches,
    classify_clusters,
    segment_text,
    highlight_inputs,
    render_outputs
);
criterion_main!(benches);
