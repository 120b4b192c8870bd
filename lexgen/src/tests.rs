//! Property tests cross-checking the regex → NFA → DFA pipeline against
//! the `regex` crate as an oracle, plus the concrete round-trip and
//! Thompson-correctness properties from the design documentation.

use crate::regex::Regex;
use crate::simplify::SimplifiedRegex;
use proptest::prelude::*;
use regex::Regex as LibRegex;

/// A small alphabet keeps both the generated regexes and the brute-force
/// oracle strings cheap to search, while still exercising union, star and
/// concatenation interactions.
const ALPHABET: &[u8] = b"ab";

fn single_rule_lexer(pattern: &[u8]) -> crate::Lexer {
    crate::Lexer::compile(&[(pattern, "r")], 10_000).unwrap()
}

fn accepts_whole_input(pattern: &[u8], input: &[u8]) -> bool {
    let lexer = single_rule_lexer(pattern);
    let segments = lexer.scan(input);
    segments.len() == 1 && segments[0].start == 0 && segments[0].rule == Some(0)
}

prop_compose! {
    fn arb_literal()(b in prop::sample::select(ALPHABET)) -> String {
        (b as char).to_string()
    }
}

fn arb_regex_string() -> impl Strategy<Value = String> {
    let leaf = arb_literal();
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a}{b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a}|{b})")),
            inner.clone().prop_map(|a| format!("({a})*")),
            inner.clone().prop_map(|a| format!("({a})+")),
            inner.prop_map(|a| format!("({a})?")),
        ]
    })
}

fn arb_input_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..8)
        .prop_map(|bytes| bytes.iter().map(|&b| b as char).collect())
}

proptest! {
    /// A single-rule lexer accepts exactly what the `regex` crate, anchored
    /// the same way, accepts (powerset correctness, §8).
    #[test]
    fn matches_regex_crate_oracle(pattern in arb_regex_string(), input in arb_input_string()) {
        let lib = LibRegex::new(&format!("^(?:{pattern})$")).unwrap();
        let ours = accepts_whole_input(pattern.as_bytes(), input.as_bytes());
        prop_assert_eq!(lib.is_match(&input), ours);
    }

    /// Parsing, then printing, then parsing again must reach a tree equal
    /// to the one a single parse produced (parse/print round trip, §8).
    #[test]
    fn parse_print_round_trip(pattern in arb_regex_string()) {
        let parsed = Regex::parse(pattern.as_bytes()).unwrap();
        let printed = parsed.to_bytes();
        let reparsed = Regex::parse(&printed).unwrap();
        prop_assert_eq!(parsed.tree, reparsed.tree);
    }

    /// Desugaring preserves the language: build straight from the
    /// simplified tree (bypassing `compile`'s own desugar call) and check
    /// against the same oracle used for the front-end tree.
    #[test]
    fn desugar_preserves_membership(pattern in arb_regex_string(), input in arb_input_string()) {
        let parsed = Regex::parse(pattern.as_bytes()).unwrap();
        let simplified = SimplifiedRegex::from(&parsed);
        let nfa = crate::nfa::Nfa::build(&simplified);
        let combined = crate::nfa::combine(&[nfa]);
        let dfa = crate::dfa::Dfa::build(&combined, 10_000).unwrap();
        let accepted = {
            let segments = crate::scanner::scan(&dfa, input.as_bytes());
            segments.len() == 1 && segments[0].start == 0
        };
        let lib = LibRegex::new(&format!("^(?:{pattern})$")).unwrap();
        prop_assert_eq!(lib.is_match(&input), accepted);
    }
}

#[test]
fn dfa_has_no_duplicate_canonical_states() {
    // (a|b)*abb must compile to a small, fully-determinized DFA: subset
    // construction dedups canonically equal NFA-state sets rather than
    // allocating a fresh DFA state per distinct path that reaches them.
    let lexer = single_rule_lexer(b"(a|b)*abb");
    assert!(lexer.dfa().state_count() <= 5);
    for input in ["abb", "aabb", "bbabb"] {
        assert!(accepts_whole_input(b"(a|b)*abb", input.as_bytes()));
    }
    assert!(!accepts_whole_input(b"(a|b)*abb", b"ab"));
}

#[test]
fn range_endpoints_are_swapped_not_rejected() {
    let parsed = Regex::parse(b"[z-a]").unwrap();
    match &parsed.tree {
        crate::regex::RegexTree::CharSet(set) => {
            assert!(set.contains(b'a'));
            assert!(set.contains(b'z'));
            assert!(set.contains(b'm'));
        }
        other => panic!("expected a char-class, got {other:?}"),
    }
}

#[test]
fn dangling_union_operand_reports_offset() {
    // "a|" raises SyntaxError at offset 2: the union operator with no
    // right-hand operand before the end of input.
    let err = Regex::parse(b"a|").unwrap_err();
    assert_eq!(err.offset(), Some(2));
}
