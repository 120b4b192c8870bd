//! Thompson construction of an NFA fragment from a [`SimplifiedRegex`],
//! and combination of several per-rule NFAs under one shared start node.

use crate::graph::{Graph, NodeId};
use crate::simplify::SimplifiedRegex;

/// A single rule's automaton: a private graph plus the (start, end) pair
/// of the fragment spanning its whole expression.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub graph: Graph,
    pub start: NodeId,
    pub end: NodeId,
}

/// A (start, end) pair into a graph under construction. The lifetime of a
/// fragment is the single upward composition step that consumes it.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: NodeId,
    end: NodeId,
}

impl Nfa {
    /// Thompson construction, per simplified form:
    ///
    /// | form | construction |
    /// |---|---|
    /// | `EmptyStr` | new s, e; ε(s→e) |
    /// | `CharSet(σ)` | new s, e; s→e labeled σ |
    /// | `Concat(a,b)` | build a, b; ε(aₑ→bₛ) |
    /// | `Union(a,b)` | new s, e; ε(s→aₛ), ε(s→bₛ), ε(aₑ→e), ε(bₑ→e) |
    /// | `Star(r)` | new s, e; ε(s→rₛ), ε(rₑ→e), ε(rₑ→rₛ), ε(s→e) |
    pub fn build(re: &SimplifiedRegex) -> Nfa {
        let mut graph = Graph::new();
        let frag = build_fragment(&mut graph, re);
        Nfa {
            graph,
            start: frag.start,
            end: frag.end,
        }
    }
}

fn build_fragment(graph: &mut Graph, re: &SimplifiedRegex) -> Fragment {
    use crate::charset::CharSet;
    match re {
        SimplifiedRegex::EmptyStr => {
            let s = graph.add_node();
            let e = graph.add_node();
            graph.add_edge(s, e, CharSet::epsilon());
            Fragment { start: s, end: e }
        }
        SimplifiedRegex::CharSet(set) => {
            let s = graph.add_node();
            let e = graph.add_node();
            graph.add_edge(s, e, set.clone());
            Fragment { start: s, end: e }
        }
        SimplifiedRegex::Concat(a, b) => {
            let a = build_fragment(graph, a);
            let b = build_fragment(graph, b);
            graph.add_edge(a.end, b.start, CharSet::epsilon());
            Fragment {
                start: a.start,
                end: b.end,
            }
        }
        SimplifiedRegex::Union(a, b) => {
            let s = graph.add_node();
            let e = graph.add_node();
            let a = build_fragment(graph, a);
            let b = build_fragment(graph, b);
            graph.add_edge(s, a.start, CharSet::epsilon());
            graph.add_edge(s, b.start, CharSet::epsilon());
            graph.add_edge(a.end, e, CharSet::epsilon());
            graph.add_edge(b.end, e, CharSet::epsilon());
            Fragment { start: s, end: e }
        }
        SimplifiedRegex::Star(r) => {
            let s = graph.add_node();
            let e = graph.add_node();
            let r = build_fragment(graph, r);
            graph.add_edge(s, r.start, CharSet::epsilon());
            graph.add_edge(r.end, e, CharSet::epsilon());
            graph.add_edge(r.end, r.start, CharSet::epsilon());
            graph.add_edge(s, e, CharSet::epsilon());
            Fragment { start: s, end: e }
        }
    }
}

/// The result of [`combine`]: one merged graph, a single fresh start
/// node, and one accepting node per input rule (in the same order).
#[derive(Debug, Clone)]
pub struct CombinedNfa {
    pub graph: Graph,
    pub start: NodeId,
    pub accepting: Vec<NodeId>,
}

/// Merges per-rule NFAs under a fresh shared start node with ε edges.
/// Rule order is preserved and is the priority order the scanner uses
/// to break same-length ties.
///
/// Node allocation happens strictly before the ε edge that reaches it:
/// for each rule the offset is taken, the rule's nodes are appended, and
/// only then is the ε edge from the new start added using the
/// post-offset start index. Swapping that order — wiring the edge to
/// the pre-offset index before the nodes exist — produces a graph with
/// an edge into a node that hasn't been allocated yet.
pub fn combine(rules: &[Nfa]) -> CombinedNfa {
    let mut graph = Graph::new();
    let start = graph.add_node();
    let mut accepting = Vec::with_capacity(rules.len());

    for rule in rules {
        let offset = graph.append(&rule.graph);
        graph.add_edge(start, offset + rule.start, crate::charset::CharSet::epsilon());
        accepting.push(offset + rule.end);
    }

    CombinedNfa {
        graph,
        start,
        accepting,
    }
}
