use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexgen::Lexer;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use regex::Regex as LibRegex;

const IDENT_RULE: &[u8] = br"[a-zA-Z_][a-zA-Z0-9_]*";

fn default_rules() -> Vec<(&'static [u8], &'static str)> {
    vec![
        (br"[ \t\n\r]+".as_slice(), "whitespace"),
        (br"[0-9]+".as_slice(), "integer"),
        (IDENT_RULE, "identifier"),
        (br"[-+*/=<>!]+".as_slice(), "operator"),
        (br"[(){}\[\];,]".as_slice(), "punctuation"),
    ]
}

pub fn lexer_compile(c: &mut Criterion) {
    let rules = default_rules();
    c.bench_function("lexgen compile", |b| {
        b.iter(|| Lexer::compile(black_box(&rules), 1000).unwrap())
    });

    c.bench_function("library regex compile (single rule, reference)", |b| {
        b.iter(|| LibRegex::new(black_box(std::str::from_utf8(IDENT_RULE).unwrap())).unwrap())
    });
}

pub fn lexer_scan(c: &mut Criterion) {
    let rules = default_rules();
    let lexer = Lexer::compile(&rules, 1000).unwrap();
    let input = b"foo 123 bar = baz + 456; (qux, 7)".repeat(8);

    c.bench_function("lexgen scan", |b| {
        b.iter(|| lexer.scan(black_box(&input)))
    });
}

pub fn identifier_match(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let string_gen = "[a-z]{1,16}".new_tree(&mut runner).unwrap();
    let lexer = Lexer::compile(&[(IDENT_RULE, "identifier")], 1000).unwrap();

    c.bench_function("lexgen scan single identifier", |b| {
        b.iter(|| lexer.scan(black_box(string_gen.current().as_bytes())))
    });

    let lib_regex = LibRegex::new(&format!("^({})$", std::str::from_utf8(IDENT_RULE).unwrap()));
    // the surface grammars differ (e.g. `\w`-style classes aren't available here), so this
    // comparison is only meaningful when the pattern happens to be valid for both engines.
    if let Ok(lib_regex) = lib_regex {
        c.bench_function("library regex match single identifier", |b| {
            b.iter(|| lib_regex.is_match(black_box(&string_gen.current())))
        });
    }
}

criterion_group!(benches, lexer_compile, lexer_scan, identifier_match);
criterion_main!(benches);
