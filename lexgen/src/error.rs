use thiserror::Error;

/// A malformed regular expression. Carries the byte offset of the first
/// offending byte in the original input, matching the source text the
/// caller passed to [`crate::regex::parse`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("trailing characters after end of expression at byte {0}")]
    TrailingCharacters(usize),
    #[error("unmatched '(' at byte {0}")]
    UnmatchedParen(usize),
    #[error("unmatched '[' at byte {0}")]
    UnmatchedBracket(usize),
    #[error("unmatched '\"' at byte {0}")]
    UnmatchedQuote(usize),
    #[error("dangling '\\' at byte {0}")]
    DanglingEscape(usize),
    #[error("operator in atom position at byte {0}")]
    OperatorInAtomPosition(usize),
    #[error("expected an expression at byte {0}, found end of input")]
    UnexpectedEnd(usize),
    #[error("empty regular expression")]
    Empty,
}

impl RegexError {
    /// The byte offset this error is anchored to, if any.
    pub fn offset(&self) -> Option<usize> {
        use RegexError::*;
        match self {
            TrailingCharacters(o)
            | UnmatchedParen(o)
            | UnmatchedBracket(o)
            | UnmatchedQuote(o)
            | DanglingEscape(o)
            | OperatorInAtomPosition(o)
            | UnexpectedEnd(o) => Some(*o),
            Empty => None,
        }
    }
}

/// Failures of the subset-construction / lexer-compilation pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error(transparent)]
    Regex(#[from] RegexError),

    /// The DFA grew past the caller-supplied state capacity. Fatal to the
    /// current compilation; retry with a larger `max_states`.
    #[error("DFA exceeded the configured capacity of {capacity} states")]
    Overflow { capacity: usize },

    /// No rules were supplied; there is nothing to compile.
    #[error("no rules supplied")]
    NoRules,
}
