//! Maximal-munch scanning driven by a compiled [`Dfa`].

use crate::dfa::Dfa;
use crate::error::LexerError;

/// One token: the byte offset it starts at, and the rule that won it, or
/// `None` for an unmatched byte (the `-1` rule id of the external
/// interface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub rule: Option<usize>,
}

/// Scans `input` against `dfa`, returning one [`Segment`] per token. This
/// is the allocating convenience wrapper around [`scan_into`]; both share
/// the same tokenization loop.
pub fn scan(dfa: &Dfa, input: &[u8]) -> Vec<Segment> {
    let mut starts = vec![0i64; input.len() + 1];
    let mut rules = vec![0i64; input.len() + 1];
    // `scan_into`'s buffers are always large enough here: at most one
    // segment is emitted per input byte, plus the sentinel.
    let count = scan_into(dfa, input, &mut starts, &mut rules)
        .expect("caller-buffer sizing above is always sufficient");
    starts[..count]
        .iter()
        .zip(&rules[..count])
        .map(|(&start, &rule)| Segment {
            start: start as usize,
            rule: if rule < 0 { None } else { Some(rule as usize) },
        })
        .collect()
}

/// The literal caller-buffer interface: writes `(start, rule_id)` pairs
/// into `starts`/`rules`, `-1` marking "no rule" in `rules`, terminated
/// by the sentinel pair `(-1, -1)`. Returns the number of segments
/// written (not counting the sentinel). Errors if the buffers are too
/// small to hold every segment plus the sentinel.
pub fn scan_into(
    dfa: &Dfa,
    input: &[u8],
    starts: &mut [i64],
    rules: &mut [i64],
) -> Result<usize, LexerError> {
    let capacity = starts.len().min(rules.len());
    let mut emitted = 0usize;

    let mut emit = |start: usize, rule: i64, starts: &mut [i64], rules: &mut [i64]| -> Result<(), LexerError> {
        if emitted >= capacity {
            return Err(LexerError::Overflow { capacity });
        }
        starts[emitted] = start as i64;
        rules[emitted] = rule;
        emitted += 1;
        Ok(())
    };

    let mut state = 0usize;
    let mut start = 0usize;
    let mut pos = 0usize;
    let mut last_accept: Option<(usize, usize)> = None; // (rule, pos)

    loop {
        if let Some(rule) = dfa.accepting_rule(state) {
            last_accept = Some((rule, pos));
        }
        if pos == input.len() {
            // No empty tokens: an accept recorded at `start` itself is zero
            // progress and is never emitted, even at end of input.
            if let Some((rule, accept_pos)) = last_accept {
                if accept_pos > start {
                    emit(start, rule as i64, starts, rules)?;
                }
            }
            break;
        }
        match dfa.transition(state, input[pos]) {
            Some(next) => {
                state = next;
                pos += 1;
            }
            None => {
                // Only backtrack to a remembered accept if it made forward
                // progress; an accept sitting at `start` (e.g. a `*`/`?`
                // rule matching zero bytes) would emit an empty token and
                // then repeat itself forever, so it falls into the
                // unknown-byte path instead.
                match last_accept {
                    Some((rule, accept_pos)) if accept_pos > start => {
                        emit(start, rule as i64, starts, rules)?;
                        start = accept_pos;
                        pos = accept_pos;
                    }
                    _ => {
                        emit(start, -1, starts, rules)?;
                        start = pos + 1;
                        pos += 1;
                    }
                }
                state = 0;
                last_accept = None;
            }
        }
    }

    if emitted >= capacity {
        return Err(LexerError::Overflow { capacity });
    }
    starts[emitted] = -1;
    rules[emitted] = -1;

    Ok(emitted)
}
