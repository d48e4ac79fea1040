//! This benchmark measures decoding and encoding of the string notation,
//! on flat terms and on nested quoted triples.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rdfstr_codec::{parse_term, term_to_string};

fn decode(c: &mut Criterion) {
    c.bench_with_input(
        BenchmarkId::new("decode", "flat"),
        black_box(&FLAT_TERMS),
        |b, &i| {
            b.iter(|| {
                for _ in 0..42 {
                    for txt in i {
                        black_box(parse_term(txt).unwrap());
                    }
                }
            });
        },
    );
    for depth in [1, 8, 64] {
        let txt = nested(depth);
        c.bench_with_input(BenchmarkId::new("decode nested", depth), &txt, |b, txt| {
            b.iter(|| black_box(parse_term(txt).unwrap()));
        });
    }
}

fn encode(c: &mut Criterion) {
    let terms: Vec<_> = FLAT_TERMS.iter().map(|t| parse_term(t).unwrap()).collect();
    c.bench_with_input(BenchmarkId::new("encode", "flat"), &terms, |b, i| {
        b.iter(|| {
            for _ in 0..42 {
                for t in i {
                    black_box(term_to_string(t));
                }
            }
        });
    });
    for depth in [1, 8, 64] {
        let txt = nested(depth);
        let term = parse_term(&txt).unwrap();
        c.bench_with_input(BenchmarkId::new("encode nested", depth), &term, |b, t| {
            b.iter(|| black_box(term_to_string(t)));
        });
    }
}

fn nested(depth: usize) -> String {
    let mut txt = String::from(r#""o"@en--ltr"#);
    for _ in 0..depth {
        txt = format!("<<_:s <http://example.org/p> {txt} http://example.org/g>>");
    }
    txt
}

criterion_group!(benches, decode, encode);
criterion_main!(benches);

const FLAT_TERMS: &[&str] = &[
    "",
    "http://example.org/",
    "http://example.org/a/much/longer/iri#with-a-fragment",
    "_:b1",
    "?x",
    r#""abc""#,
    r#""a \"quoted\" value""#,
    r#""42"^^http://www.w3.org/2001/XMLSchema#integer"#,
    r#""chat"@fr"#,
    r#""Chat"@FR-be"#,
    r#""abc"@en-us--rtl"#,
];
