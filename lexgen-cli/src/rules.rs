//! The built-in default rule set used by the `tokenize` subcommand when no
//! rule file is given. Mirrors the original source's `create_*_regex`
//! constructors: each rule is built by composing [`RegexTree`] nodes
//! directly rather than round-tripping through surface syntax text.

use lexgen::charset::CharSet;
use lexgen::regex::{Regex, RegexTree};

fn charset(bytes: impl IntoIterator<Item = u8>) -> RegexTree {
    RegexTree::CharSet(CharSet::from_bytes(bytes))
}

fn range(start: u8, end: u8) -> RegexTree {
    RegexTree::CharSet(CharSet::range(start, end))
}

fn single(b: u8) -> RegexTree {
    RegexTree::SingleChar(b)
}

fn union_all(mut trees: Vec<RegexTree>) -> RegexTree {
    let mut tree = trees.remove(0);
    for next in trees {
        tree = RegexTree::Union(Box::new(tree), Box::new(next));
    }
    tree
}

fn concat_all(mut trees: Vec<RegexTree>) -> RegexTree {
    let mut tree = trees.remove(0);
    for next in trees {
        tree = RegexTree::Concat(Box::new(tree), Box::new(next));
    }
    tree
}

fn plus(t: RegexTree) -> RegexTree {
    RegexTree::Plus(Box::new(t))
}

fn star(t: RegexTree) -> RegexTree {
    RegexTree::Star(Box::new(t))
}

fn whitespace() -> RegexTree {
    plus(charset([b' ', b'\t', b'\n', b'\r']))
}

fn identifier() -> RegexTree {
    let head = union_all(vec![range(b'a', b'z'), range(b'A', b'Z'), single(b'_')]);
    let tail = union_all(vec![range(b'a', b'z'), range(b'A', b'Z'), range(b'0', b'9'), single(b'_')]);
    concat_all(vec![head, star(tail)])
}

fn integer() -> RegexTree {
    plus(range(b'0', b'9'))
}

fn operator() -> RegexTree {
    charset([b'+', b'-', b'*', b'/', b'%'])
}

fn comparison() -> RegexTree {
    union_all(vec![
        concat_all(vec![single(b'='), single(b'=')]),
        concat_all(vec![single(b'!'), single(b'=')]),
        concat_all(vec![single(b'<'), single(b'=')]),
        concat_all(vec![single(b'>'), single(b'=')]),
        single(b'<'),
        single(b'>'),
    ])
}

fn punctuation() -> RegexTree {
    charset([b',', b';', b'.', b':'])
}

fn bracket() -> RegexTree {
    charset([b'(', b')', b'{', b'}', b'[', b']'])
}

fn symbol() -> RegexTree {
    charset([b'!', b'@', b'#', b'$', b'^', b'&', b'|', b'~'])
}

/// The fixed, ordered default rule list — index order is also priority
/// order, so `operator` (rule 3) wins over `symbol` (rule 7) wherever
/// both would match a single byte the same length.
pub fn default_rules() -> Vec<(Regex, &'static str)> {
    vec![
        (Regex { tree: whitespace() }, "whitespace"),
        (Regex { tree: identifier() }, "identifier"),
        (Regex { tree: integer() }, "integer"),
        (Regex { tree: operator() }, "operator"),
        (Regex { tree: comparison() }, "comparison"),
        (Regex { tree: punctuation() }, "punctuation"),
        (Regex { tree: bracket() }, "bracket"),
        (Regex { tree: symbol() }, "symbol"),
    ]
}
