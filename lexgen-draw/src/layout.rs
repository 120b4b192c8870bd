//! Force-directed node placement, grounded in the original source's
//! `dfa_visualizer.cpp` layout routine: nodes repel each other, edges pull
//! their endpoints together, and the whole system is relaxed over a fixed
//! number of iterations under a shrinking step size.

use crate::pos2::{pos2, Pos2};
use lexgen::graph::GraphArtifact;

const ITERATIONS: usize = 200;
const REPULSION: f32 = 9.0;
const ATTRACTION: f32 = 0.02;
const INITIAL_STEP: f32 = 1.0;

/// Returns one position per node, deterministic for a given graph (the
/// initial placement is a circle, not anything random, so repeated calls
/// on the same input always produce the same layout).
pub fn force_layout(graph: &GraphArtifact) -> Vec<Pos2> {
    let n = graph.node_count;
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![pos2(0.0, 0.0)];
    }

    let radius = n as f32;
    let mut positions: Vec<Pos2> = (0..n)
        .map(|i| {
            let theta = 2.0 * std::f32::consts::PI * i as f32 / n as f32;
            pos2(radius * theta.cos(), radius * theta.sin())
        })
        .collect();

    let pairs: Vec<(usize, usize)> = graph
        .edges
        .iter()
        .filter(|e| e.src != e.dst)
        .map(|e| (e.src, e.dst))
        .collect();

    for step in 0..ITERATIONS {
        let cooling = 1.0 - step as f32 / ITERATIONS as f32;
        let mut forces = vec![pos2(0.0, 0.0); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let dist2 = (delta.x * delta.x + delta.y * delta.y).max(0.01);
                let push = delta * (REPULSION / dist2);
                forces[i] = forces[i] + push;
                forces[j] = forces[j] - push;
            }
        }

        for &(src, dst) in &pairs {
            let delta = positions[dst] - positions[src];
            let pull = delta * ATTRACTION;
            forces[src] = forces[src] + pull;
            forces[dst] = forces[dst] - pull;
        }

        let step_size = INITIAL_STEP * cooling;
        for i in 0..n {
            positions[i] = positions[i] + forces[i] * step_size;
        }
    }

    positions
}
