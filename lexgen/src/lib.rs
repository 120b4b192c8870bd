//! `lexgen` compiles an ordered list of regular-expression rules into a
//! deterministic automaton and scans byte input against it with
//! maximal-munch, rule-priority semantics.
//!
//! ## Usage
//!
//! ```rust
//! use lexgen::Lexer;
//!
//! let lexer = Lexer::compile(&[
//!     (br"[ \t\n\r]+".as_slice(), "whitespace"),
//!     (br"[0-9]+".as_slice(), "integer"),
//!     (br"[a-zA-Z][a-zA-Z0-9]*".as_slice(), "identifier"),
//! ], 1000).unwrap();
//!
//! let tokens = lexer.scan(b"abc 123");
//! let names: Vec<_> = tokens.iter().map(|s| lexer.rule_name(s.rule)).collect();
//! assert_eq!(names, ["identifier", "whitespace", "integer"]);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`regex`] — surface syntax → front-end AST ([`regex::parse`]).
//! 2. [`simplify`] — front-end AST → simplified algebra.
//! 3. [`nfa`] — Thompson construction of a per-rule NFA, then [`nfa::combine`]
//!    unions them under a shared start node.
//! 4. [`dfa`] — subset construction ([`dfa::Dfa::build`]) into a deterministic,
//!    rule-labeled automaton.
//! 5. [`scanner`] — maximal-munch tokenization ([`scanner::scan`]) driven by the DFA.
//!
//! [`Lexer`] ties all five stages together behind one entry point.

pub mod charset;
pub mod dfa;
pub mod error;
pub mod graph;
pub mod nfa;
pub mod regex;
pub mod scanner;
pub mod simplify;
mod table;

#[cfg(test)]
mod tests;

pub use error::{LexerError, RegexError};
pub use scanner::Segment;

use dfa::Dfa;

/// A compiled set of rules: the DFA plus the rule names supplied at
/// compile time. Immutable after construction; cheap to share across
/// threads (`Dfa` holds no interior mutability), so a caller that wants
/// to scan concurrently from one compiled lexer can wrap it in an `Arc`.
#[derive(Debug, Clone)]
pub struct Lexer {
    dfa: Dfa,
    rule_names: Vec<String>,
}

impl Lexer {
    /// Compiles an ordered list of `(pattern, name)` rules. Rule index is
    /// priority: when two rules match the same longest prefix, the
    /// earlier one in this list wins. `max_states` bounds the DFA size;
    /// see [`LexerError::Overflow`].
    pub fn compile(rules: &[(&[u8], &str)], max_states: usize) -> Result<Lexer, LexerError> {
        if rules.is_empty() {
            return Err(LexerError::NoRules);
        }
        let parsed: Result<Vec<_>, RegexError> =
            rules.iter().map(|(pattern, _)| regex::Regex::parse(pattern)).collect();
        let parsed = parsed?;
        Self::from_regexes(
            &parsed,
            &rules.iter().map(|(_, name)| name.to_string()).collect::<Vec<_>>(),
            max_states,
        )
    }

    /// Compiles an ordered list of already-parsed rules (the programmatic
    /// interface of the external-interfaces section: an ordered list of
    /// front-end AST roots, rule index as priority).
    pub fn from_regexes(
        rules: &[regex::Regex],
        names: &[String],
        max_states: usize,
    ) -> Result<Lexer, LexerError> {
        if rules.is_empty() {
            return Err(LexerError::NoRules);
        }
        let nfas: Vec<nfa::Nfa> = rules
            .iter()
            .map(|r| nfa::Nfa::build(&simplify::SimplifiedRegex::from(r)))
            .collect();
        let combined = nfa::combine(&nfas);
        let dfa = Dfa::build(&combined, max_states)?;
        Ok(Lexer {
            dfa,
            rule_names: names.to_vec(),
        })
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn rule_name(&self, rule: Option<usize>) -> &str {
        rule.and_then(|i| self.rule_names.get(i).map(String::as_str))
            .unwrap_or("?")
    }

    /// Allocating scan entry point; see [`scanner::scan`].
    pub fn scan(&self, input: &[u8]) -> Vec<Segment> {
        scanner::scan(&self.dfa, input)
    }

    /// Caller-buffer scan entry point; see [`scanner::scan_into`].
    pub fn scan_into(
        &self,
        input: &[u8],
        starts: &mut [i64],
        rules: &mut [i64],
    ) -> Result<usize, LexerError> {
        scanner::scan_into(&self.dfa, input, starts, rules)
    }
}

#[cfg(test)]
mod lexer_tests {
    use super::*;

    #[test]
    fn compiles_and_scans_a_small_token_grammar() {
        let lexer = Lexer::compile(
            &[
                (br"[ \t\n\r]+".as_slice(), "whitespace"),
                (br"[0-9]+".as_slice(), "integer"),
                (br"[a-zA-Z][a-zA-Z0-9]*".as_slice(), "identifier"),
            ],
            1000,
        )
        .unwrap();

        let segments = lexer.scan(b"abc 123");
        let names: Vec<_> = segments.iter().map(|s| lexer.rule_name(s.rule)).collect();
        assert_eq!(names, ["identifier", "whitespace", "integer"]);
        assert_eq!(segments[0].start, 0);
        assert_eq!(segments[1].start, 3);
        assert_eq!(segments[2].start, 4);
    }

    #[test]
    fn maximal_munch_beats_priority() {
        // "if" is rule 0, a general identifier is rule 1; "iffy" is longer than
        // "if" and must win as a single identifier token despite its lower priority.
        let lexer = Lexer::compile(
            &[(b"\"if\"".as_slice(), "if"), (br"[a-z]+".as_slice(), "identifier")],
            1000,
        )
        .unwrap();
        let segments = lexer.scan(b"iffy");
        assert_eq!(segments.len(), 1);
        assert_eq!(lexer.rule_name(segments[0].rule), "identifier");
    }

    #[test]
    fn priority_breaks_equal_length_ties() {
        // Same rules as above; "if" matches both at length 2, so the lower
        // rule index ("if") must win over "identifier".
        let lexer = Lexer::compile(
            &[(b"\"if\"".as_slice(), "if"), (br"[a-z]+".as_slice(), "identifier")],
            1000,
        )
        .unwrap();
        let segments = lexer.scan(b"if");
        assert_eq!(segments.len(), 1);
        assert_eq!(lexer.rule_name(segments[0].rule), "if");
    }

    #[test]
    fn unknown_bytes_recover_and_continue() {
        let lexer = Lexer::compile(&[(br"[0-9]+".as_slice(), "integer")], 1000).unwrap();
        let segments = lexer.scan(b"12a34");
        let got: Vec<_> = segments
            .iter()
            .map(|s| (s.start, lexer.rule_name(s.rule).to_string()))
            .collect();
        assert_eq!(
            got,
            vec![(0, "integer".to_string()), (2, "?".to_string()), (3, "integer".to_string())]
        );
    }

    #[test]
    fn nullable_rule_does_not_loop_on_a_non_matching_byte() {
        // "word" can match zero 'a's, so at a byte it can't consume the
        // remembered accept sits at `start` itself. That must not be
        // emitted or backtracked to (either would make zero progress and
        // spin forever); the byte is reported unknown and scanning moves on.
        let lexer = Lexer::compile(&[(b"a*".as_slice(), "word")], 1000).unwrap();
        let segments = lexer.scan(b"b");
        let got: Vec<_> = segments
            .iter()
            .map(|s| (s.start, lexer.rule_name(s.rule).to_string()))
            .collect();
        assert_eq!(got, vec![(0, "?".to_string())]);
    }

    #[test]
    fn overflow_is_reported_not_silently_truncated() {
        let result = Lexer::compile(&[(br"[a-z]+".as_slice(), "word")], 1);
        assert!(matches!(result, Err(LexerError::Overflow { capacity: 1 })));
    }
}
