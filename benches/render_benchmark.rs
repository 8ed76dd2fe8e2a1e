//! Benchmarks for tree building and hOCR rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic recognition responses.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use vision_hocr::parser::build_tree;
use vision_hocr::render::{to_hocr, HocrOptions};
use vision_hocr::RecognitionResponse;

fn poly(x0: i32, y0: i32, x1: i32, y1: i32) -> Value {
    json!({"vertices": [
        {"x": x0, "y": y0}, {"x": x1, "y": y0}, {"x": x1, "y": y1}, {"x": x0, "y": y1}
    ]})
}

/// Creates a response with `blocks` blocks of 3 paragraphs, each paragraph
/// holding 5 lines of 8 words.
fn create_test_response(blocks: usize) -> RecognitionResponse {
    let mut text = String::new();
    let blocks: Vec<Value> = (0..blocks)
        .map(|b| {
            let paragraphs: Vec<Value> = (0..3)
                .map(|p| {
                    let mut words = Vec::new();
                    for l in 0..5 {
                        for w in 0..8 {
                            let x = (w * 60) as i32;
                            let y = ((b * 15 + p * 5 + l) * 25) as i32;
                            let brk = if w == 7 { "EOL_SURE_SPACE" } else { "SPACE" };
                            words.push(json!({
                                "boundingBox": poly(x, y, x + 50, y + 20),
                                "symbols": [
                                    {"text": "w"},
                                    {"text": "o"},
                                    {"text": "r"},
                                    {"text": "d", "property": {"detectedBreak": {"type": brk}}}
                                ]
                            }));
                            text.push_str("word ");
                        }
                        text.push('\n');
                    }
                    json!({"boundingBox": poly(0, 0, 1, 1), "words": words})
                })
                .collect();
            json!({"boundingBox": poly(0, 0, 1, 1), "paragraphs": paragraphs})
        })
        .collect();

    serde_json::from_value(json!({
        "fullTextAnnotation": {
            "pages": [{"width": 2480, "height": 3508, "blocks": blocks}],
            "text": text
        }
    }))
    .expect("synthetic response is valid")
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for blocks in [1, 10, 50] {
        let response = create_test_response(blocks);
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &response, |b, response| {
            b.iter(|| build_tree(black_box(response), 1))
        });
    }

    group.finish();
}

fn bench_render_hocr(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_hocr");
    let options = HocrOptions::default();

    for blocks in [1, 10, 50] {
        let page = build_tree(&create_test_response(blocks), 1).expect("tree builds");
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &page.document, |b, doc| {
            b.iter(|| to_hocr(black_box(doc), &options))
        });
    }

    group.finish();
}

fn bench_parse_response(c: &mut Criterion) {
    let json = serde_json::to_string(&create_test_response(10)).expect("serializes");

    c.bench_function("parse_response_10_blocks", |b| {
        b.iter(|| RecognitionResponse::from_json(black_box(&json)))
    });
}

criterion_group!(benches, bench_build_tree, bench_render_hocr, bench_parse_response);
criterion_main!(benches);
