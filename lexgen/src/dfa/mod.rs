//! Subset construction: turns a [`CombinedNfa`] into a deterministic
//! automaton with dense byte-indexed transition rows and a per-state
//! winning-rule label.

use crate::charset::CharSet;
use crate::error::LexerError;
use crate::graph::{Edge, Graph, GraphArtifact};
use crate::nfa::CombinedNfa;
use std::collections::HashMap;

pub type StateId = usize;

/// A deterministic automaton over bytes. Each state carries a dense
/// `[Option<StateId>; 256]` transition row — the "byte → state table"
/// substitution the design notes call out as a legitimate replacement
/// for enumerating character-set membership at scan time — plus the id
/// of the rule it accepts, or `None` if it is not an accepting state.
#[derive(Debug, Clone)]
pub struct Dfa {
    transitions: Vec<[Option<StateId>; 256]>,
    accepting: Vec<Option<usize>>,
}

impl Dfa {
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn transition(&self, state: StateId, byte: u8) -> Option<StateId> {
        self.transitions[state][byte as usize]
    }

    /// `None` if `state` is not accepting; otherwise the lowest-index
    /// rule that matches when execution halts in this state.
    pub fn accepting_rule(&self, state: StateId) -> Option<usize> {
        self.accepting[state]
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state].is_some()
    }

    /// The external-interfaces graph artifact (§6): one edge per
    /// `(state, byte)` transition, labeled with the singleton byte — no
    /// compression into byte ranges is performed, matching the design
    /// note that this is a legitimate, not a required, optimization.
    pub fn graph_artifact(&self) -> GraphArtifact {
        let mut edges = Vec::new();
        for (state, row) in self.transitions.iter().enumerate() {
            for (byte, target) in row.iter().enumerate() {
                if let Some(target) = target {
                    edges.push(Edge {
                        src: state,
                        dst: *target,
                        label: CharSet::single(byte as u8),
                    });
                }
            }
        }
        GraphArtifact {
            node_count: self.transitions.len(),
            edges,
            accepting: self.accepting.clone(),
        }
    }

    /// Debug-prints the transition table in an aligned-column style
    /// matching the reference table printer, restricted to the bytes the
    /// automaton actually transitions on (not all 256).
    pub fn to_pretty_string(&self) -> String {
        let mut used = [false; 256];
        for row in &self.transitions {
            for (byte, target) in row.iter().enumerate() {
                if target.is_some() {
                    used[byte] = true;
                }
            }
        }
        let bytes: Vec<usize> = (0..256).filter(|&b| used[b]).collect();

        let mut table = crate::table::Table::default();
        let mut header = vec![String::from("state")];
        header.extend(bytes.iter().map(|&b| format!("{:02x}", b)));
        header.push("rule".to_string());

        let mut rows_owned = vec![header];
        for (id, row) in self.transitions.iter().enumerate() {
            let mut cells = vec![id.to_string()];
            cells.extend(bytes.iter().map(|&b| match row[b] {
                Some(target) => target.to_string(),
                None => "-".to_string(),
            }));
            cells.push(
                self.accepting[id]
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
            rows_owned.push(cells);
        }

        for row in &rows_owned {
            table.push_row(row.iter().map(String::as_str).collect());
        }
        table.to_string("  ")
    }
}

/// Canonical, sorted, deduplicated set of NFA node indices — a DFA
/// state's identity before it has been assigned a [`StateId`].
type StateSet = Vec<usize>;

fn epsilon_closure(graph: &Graph, seeds: &[usize]) -> StateSet {
    let mut seen: Vec<usize> = seeds.to_vec();
    let mut stack: Vec<usize> = seeds.to_vec();
    while let Some(node) = stack.pop() {
        for edge in graph.edges_from(node) {
            if edge.label.is_epsilon() && !seen.contains(&edge.dst) {
                seen.push(edge.dst);
                stack.push(edge.dst);
            }
        }
    }
    seen.sort_unstable();
    seen.dedup();
    seen
}

fn alphabet(graph: &Graph) -> Vec<u8> {
    let mut bytes: Vec<u8> = graph
        .edges()
        .iter()
        .flat_map(|e| e.label.bytes().iter().copied())
        .collect();
    bytes.sort_unstable();
    bytes.dedup();
    bytes
}

fn byte_move(graph: &Graph, states: &[usize], byte: u8) -> StateSet {
    let mut out = Vec::new();
    for &node in states {
        for edge in graph.edges_from(node) {
            if !edge.label.is_epsilon() && edge.label.contains(byte) && !out.contains(&edge.dst) {
                out.push(edge.dst);
            }
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}

impl Dfa {
    /// Classical powerset construction with ε-closure. `max_states`
    /// bounds the DFA's size; exceeding it surfaces [`LexerError::Overflow`]
    /// instead of growing without limit.
    pub fn build(nfa: &CombinedNfa, max_states: usize) -> Result<Dfa, LexerError> {
        let sigma = alphabet(&nfa.graph);

        let start_set = epsilon_closure(&nfa.graph, &[nfa.start]);
        let mut set_to_id: HashMap<StateSet, StateId> = HashMap::new();
        set_to_id.insert(start_set.clone(), 0);
        let mut sets: Vec<StateSet> = vec![start_set];
        let mut worklist: Vec<StateId> = vec![0];

        let mut transitions: Vec<[Option<StateId>; 256]> = vec![[None; 256]];

        while let Some(id) = worklist.pop() {
            let set = sets[id].clone();
            for &byte in &sigma {
                let moved = byte_move(&nfa.graph, &set, byte);
                if moved.is_empty() {
                    continue;
                }
                let target_set = epsilon_closure(&nfa.graph, &moved);
                let target_id = match set_to_id.get(&target_set) {
                    Some(&id) => id,
                    None => {
                        if sets.len() >= max_states {
                            return Err(LexerError::Overflow {
                                capacity: max_states,
                            });
                        }
                        let id = sets.len();
                        set_to_id.insert(target_set.clone(), id);
                        sets.push(target_set);
                        transitions.push([None; 256]);
                        worklist.push(id);
                        id
                    }
                };
                transitions[id][byte as usize] = Some(target_id);
            }
        }

        let accepting = sets
            .iter()
            .map(|set| {
                set.iter()
                    .filter_map(|node| nfa.accepting.iter().position(|&acc| acc == *node))
                    .min()
            })
            .collect();

        Ok(Dfa {
            transitions,
            accepting,
        })
    }
}
