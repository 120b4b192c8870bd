//! Desugars the front-end [`RegexTree`] onto the smaller algebra the NFA
//! builder understands: only `CharSet`, `EmptyStr`, `Star`, `Union` and
//! `Concat` survive.

use crate::charset::CharSet;
use crate::regex::RegexTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimplifiedRegex {
    CharSet(CharSet),
    EmptyStr,
    Star(Box<SimplifiedRegex>),
    Union(Box<SimplifiedRegex>, Box<SimplifiedRegex>),
    Concat(Box<SimplifiedRegex>, Box<SimplifiedRegex>),
}

impl From<&RegexTree> for SimplifiedRegex {
    fn from(tree: &RegexTree) -> Self {
        use SimplifiedRegex as S;
        match tree {
            RegexTree::CharSet(set) => S::CharSet(set.clone()),
            RegexTree::SingleChar(b) => S::CharSet(CharSet::single(*b)),
            RegexTree::String(bytes) => bytes
                .iter()
                .map(|b| S::CharSet(CharSet::single(*b)))
                .reduce(|acc, next| S::Concat(Box::new(acc), Box::new(next)))
                .unwrap_or(S::EmptyStr),
            RegexTree::Option(r) => {
                S::Union(Box::new(S::from(r.as_ref())), Box::new(S::EmptyStr))
            }
            RegexTree::Star(r) => S::Star(Box::new(S::from(r.as_ref()))),
            // The two copies below must be independently built, not shared: the builder
            // mutates no AST, but each must own its own subtree since downstream code may
            // free either independently of the other.
            RegexTree::Plus(r) => S::Concat(
                Box::new(S::from(r.as_ref())),
                Box::new(S::Star(Box::new(S::from(r.as_ref())))),
            ),
            RegexTree::Union(a, b) => {
                S::Union(Box::new(S::from(a.as_ref())), Box::new(S::from(b.as_ref())))
            }
            RegexTree::Concat(a, b) => {
                S::Concat(Box::new(S::from(a.as_ref())), Box::new(S::from(b.as_ref())))
            }
        }
    }
}

impl From<&crate::regex::Regex> for SimplifiedRegex {
    fn from(r: &crate::regex::Regex) -> Self {
        SimplifiedRegex::from(&r.tree)
    }
}
