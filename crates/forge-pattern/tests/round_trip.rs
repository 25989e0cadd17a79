//! Generated strings must be matched in full by a real regex engine.

use forge_core::RandomStream;
use forge_pattern::{compile, compile_cached};
use regex::Regex;

const SAMPLES: usize = 1_000;

fn assert_round_trip(source: &str, seed: u64) {
    assert_matches_regex(source, source, seed);
}

/// Check `source` against an equivalent regex written for the `regex` crate.
///
/// `\d`, `\w` and `\s` are ASCII here but Unicode-aware in `regex`, so their
/// negations are spelled out for the checker.
fn assert_matches_regex(source: &str, equivalent: &str, seed: u64) {
    let pattern = compile(source).unwrap_or_else(|e| panic!("{source} should compile: {e}"));
    let matcher = Regex::new(&format!(r"\A(?:{equivalent})\z")).expect("valid regex");
    let mut stream = RandomStream::new(seed);

    for _ in 0..SAMPLES {
        let value = pattern.generate(&mut stream);
        assert!(
            matcher.is_match(&value),
            "{value:?} generated from {source:?} does not match"
        );
    }
}

#[test]
fn test_simple_class_repetition() {
    assert_round_trip("[abc]+", 1);
}

#[test]
fn test_uuid_like_layout() {
    assert_round_trip(r"\d{8}-\d{4}-\d{4}-\d{4}-\d{12}", 2);
}

#[test]
fn test_email_like_layout() {
    assert_round_trip(r"[a-z]+@[a-z]+\.[a-z]{3}", 3);
}

#[test]
fn test_groups_and_alternation() {
    assert_round_trip("(foo|bar)*baz?", 4);
    assert_round_trip("(?:ab|cd){2,}x?", 5);
    assert_round_trip("^[A-Z][a-z]*( [A-Z][a-z]*)*$", 6);
}

#[test]
fn test_negated_classes_and_wildcard() {
    assert_round_trip("[^a-z]{2,5}", 7);
    assert_round_trip(".{3,10}", 8);
    assert_matches_regex(r"[^\d\s]+", r"[^0-9\t\n\x0B\x0C\r ]+", 9);
}

#[test]
fn test_negated_ascii_generates_non_ascii() {
    assert_round_trip(r"[^\x00-\x7F]+", 16);
    assert_round_trip("[^ -~]{8}", 17);
}

#[test]
fn test_shorthand_escapes() {
    assert_matches_regex(
        r"\w+\s\W\S\D",
        r"[0-9A-Za-z_]+[\t\n\x0B\x0C\r ][^0-9A-Za-z_][^\t\n\x0B\x0C\r ][^0-9]",
        10,
    );
}

#[test]
fn test_escaped_metacharacters() {
    assert_round_trip(r"\t\n\r\.\*\+\?\(\)\[\]\{\}\|\^\$\\", 11);
    assert_round_trip(r"[\x41-\x46]{4}", 12);
    assert_round_trip("[]x]{3}[a-]", 13);
}

#[test]
fn test_lazy_quantifiers() {
    assert_round_trip("a+?b*?c??", 14);
}

#[test]
fn test_cached_patterns_generate_identically() {
    let cached = compile_cached(r"[0-9a-f]{16}").unwrap();
    let fresh = compile(r"[0-9a-f]{16}").unwrap();

    let mut a = RandomStream::new(15);
    let mut b = RandomStream::new(15);
    for _ in 0..50 {
        assert_eq!(cached.generate(&mut a), fresh.generate(&mut b));
    }
}
