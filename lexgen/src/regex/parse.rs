//! Hand-written recursive-descent parser for the surface grammar.
//!
//! `nom`'s generic error type loses the byte offset of the actual failure
//! once more than one alternative has been tried, which this crate's
//! [`RegexError`] taxonomy requires precisely (see the error-handling
//! design). Each production below therefore returns a plain `Result`
//! carrying an already-classified [`RegexError`], one function per
//! grammar rule, the same granularity `nom`-combinator parsers in this
//! codebase's lineage use.

use super::{Regex, RegexTree};
use crate::charset::CharSet;
use crate::error::RegexError;

type PResult<'a, T> = Result<(&'a [u8], T), RegexError>;

pub fn parse(input: &[u8]) -> Result<Regex, RegexError> {
    if input.is_empty() {
        return Err(RegexError::Empty);
    }
    let (rest, tree) = union(input, input)?;
    let rest = skip_ws(rest);
    if rest.is_empty() {
        Ok(Regex { tree })
    } else {
        Err(RegexError::TrailingCharacters(offset(input, rest)))
    }
}

fn offset(original: &[u8], rest: &[u8]) -> usize {
    original.len() - rest.len()
}

fn skip_ws(input: &[u8]) -> &[u8] {
    let n = input
        .iter()
        .take_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        .count();
    &input[n..]
}

fn escape_value(b: u8) -> u8 {
    match b {
        b'n' => b'\n',
        b't' => b'\t',
        b'r' => b'\r',
        b'0' => 0,
        other => other, // includes \\, \", \' and "any other escape yields the escaped byte verbatim"
    }
}

fn union<'a>(original: &[u8], input: &'a [u8]) -> PResult<'a, RegexTree> {
    let input = skip_ws(input);
    let (mut input, mut acc) = concat(original, input)?;
    loop {
        let after_ws = skip_ws(input);
        if after_ws.first() == Some(&b'|') {
            let (rest, rhs) = concat(original, &after_ws[1..])?;
            acc = RegexTree::Union(Box::new(acc), Box::new(rhs));
            input = rest;
        } else {
            input = after_ws;
            break;
        }
    }
    Ok((input, acc))
}

fn concat<'a>(original: &[u8], input: &'a [u8]) -> PResult<'a, RegexTree> {
    let input = skip_ws(input);
    let (mut input, mut acc) = repeat(original, input)?;
    loop {
        let after_ws = skip_ws(input);
        match after_ws.first() {
            None | Some(b'|') | Some(b')') => {
                input = after_ws;
                break;
            }
            // repeat() already bound any '*'/'+'/'?' to the atom before it, so one
            // showing up here has nothing left to bind to.
            Some(b'*') | Some(b'+') | Some(b'?') => {
                return Err(RegexError::OperatorInAtomPosition(offset(original, after_ws)));
            }
            _ => {
                let (rest, rhs) = repeat(original, after_ws)?;
                acc = RegexTree::Concat(Box::new(acc), Box::new(rhs));
                input = rest;
            }
        }
    }
    Ok((input, acc))
}

fn repeat<'a>(original: &[u8], input: &'a [u8]) -> PResult<'a, RegexTree> {
    let (mut input, mut acc) = atom(original, input)?;
    loop {
        let after_ws = skip_ws(input);
        match after_ws.first() {
            Some(b'*') => {
                acc = RegexTree::Star(Box::new(acc));
                input = &after_ws[1..];
            }
            Some(b'+') => {
                acc = RegexTree::Plus(Box::new(acc));
                input = &after_ws[1..];
            }
            Some(b'?') => {
                acc = RegexTree::Option(Box::new(acc));
                input = &after_ws[1..];
            }
            _ => {
                input = after_ws;
                break;
            }
        }
    }
    Ok((input, acc))
}

fn atom<'a>(original: &[u8], input: &'a [u8]) -> PResult<'a, RegexTree> {
    let input = skip_ws(input);
    match input.first() {
        None => Err(RegexError::UnexpectedEnd(offset(original, input))),
        Some(b'(') => {
            let open = offset(original, input);
            let (rest, inner) = union(original, &input[1..])?;
            let rest = skip_ws(rest);
            if rest.first() == Some(&b')') {
                Ok((&rest[1..], inner))
            } else {
                Err(RegexError::UnmatchedParen(open))
            }
        }
        Some(b'[') => {
            let open = offset(original, input);
            char_class(original, &input[1..], open)
        }
        Some(b'"') => {
            let open = offset(original, input);
            string_literal(original, &input[1..], open)
        }
        Some(b'\\') => {
            let bs = offset(original, input);
            escaped_char(original, &input[1..], bs)
        }
        Some(b'|') | Some(b')') | Some(b'*') | Some(b'+') | Some(b'?') => {
            Err(RegexError::OperatorInAtomPosition(offset(original, input)))
        }
        Some(&b) => Ok((&input[1..], RegexTree::SingleChar(b))),
    }
}

fn escaped_char<'a>(_original: &[u8], input: &'a [u8], bs_offset: usize) -> PResult<'a, RegexTree> {
    match input.first() {
        None => Err(RegexError::DanglingEscape(bs_offset)),
        Some(&b) => Ok((&input[1..], RegexTree::SingleChar(escape_value(b)))),
    }
}

/// One `class` item: a plain byte, or an escaped byte.
fn class_byte<'a>(original: &[u8], input: &'a [u8], open: usize) -> PResult<'a, u8> {
    match input.first() {
        None => Err(RegexError::UnmatchedBracket(open)),
        Some(b'\\') => {
            let bs = offset(original, input);
            let rest = &input[1..];
            match rest.first() {
                None => Err(RegexError::DanglingEscape(bs)),
                Some(&b) => Ok((&rest[1..], escape_value(b))),
            }
        }
        Some(&b) => Ok((&input[1..], b)),
    }
}

fn char_class<'a>(original: &[u8], input: &'a [u8], open: usize) -> PResult<'a, RegexTree> {
    let mut set = CharSet::epsilon();
    let mut input = input;
    loop {
        match input.first() {
            None => return Err(RegexError::UnmatchedBracket(open)),
            Some(b']') => return Ok((&input[1..], RegexTree::CharSet(set))),
            _ => {
                let (rest, lo) = class_byte(original, input, open)?;
                // a '-' right before the closing ']' is a literal hyphen, not a range.
                if rest.first() == Some(&b'-') && rest.get(1) != Some(&b']') && rest.len() >= 2 {
                    let (rest2, hi) = class_byte(original, &rest[1..], open)?;
                    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                    set = set.union(&CharSet::range(lo, hi));
                    input = rest2;
                } else {
                    set = set.union(&CharSet::single(lo));
                    input = rest;
                }
            }
        }
    }
}

fn string_literal<'a>(original: &[u8], input: &'a [u8], open: usize) -> PResult<'a, RegexTree> {
    let mut bytes = Vec::new();
    let mut input = input;
    loop {
        match input.first() {
            None => return Err(RegexError::UnmatchedQuote(open)),
            Some(b'"') => return Ok((&input[1..], RegexTree::String(bytes))),
            Some(b'\\') => {
                let bs = offset(original, input);
                let rest = &input[1..];
                match rest.first() {
                    None => return Err(RegexError::DanglingEscape(bs)),
                    Some(&b) => {
                        bytes.push(escape_value(b));
                        input = &rest[1..];
                    }
                }
            }
            Some(&b) => {
                bytes.push(b);
                input = &input[1..];
            }
        }
    }
}
