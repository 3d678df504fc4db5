#![allow(missing_docs)]
//! Benchmarks for holdings statement parsing and rendering.
//!
//! Uses Criterion.rs for statistical analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marcholdings::{parse_holdings, segment, to_text, Holding};

/// A mix of the statement shapes seen in serials holdings data.
const STATEMENTS: [&str; 8] = [
    "v.1(2010)-",
    "v.1-2(2010-2011)",
    "v.2:no.3-v.6:no.5(2002:Mar.-2006:May)",
    "v.2:no.3-v.6:no.5(2002:Mar. 2-2006:May 6)",
    "v.1:no.3,5-6(1982:May/June,Sept./Oct.-Nov./Dec.)",
    "v.1,3(1999,2001)",
    "1992/1996-",
    "v.3(1995:spring-1996:fall)",
];

/// Benchmark segmenting statements without building holdings.
fn benchmark_segment(c: &mut Criterion) {
    c.bench_function("segment_statements", |b| {
        b.iter(|| {
            for statement in STATEMENTS {
                let _ = black_box(segment(black_box(statement)));
            }
        });
    });
}

/// Benchmark the full parse of every statement.
fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_holdings", |b| {
        b.iter(|| {
            for statement in STATEMENTS {
                let _ = black_box(parse_holdings(black_box(statement)));
            }
        });
    });
}

/// Benchmark rendering already-parsed holdings.
fn benchmark_to_text(c: &mut Criterion) {
    let holdings: Vec<Holding> = STATEMENTS
        .iter()
        .flat_map(|statement| parse_holdings(statement).expect("benchmark statement parses"))
        .collect();

    c.bench_function("to_text", |b| {
        b.iter(|| {
            for holding in &holdings {
                black_box(to_text(black_box(holding)));
            }
        });
    });
}

criterion_group!(benches, benchmark_segment, benchmark_parse, benchmark_to_text);
criterion_main!(benches);
