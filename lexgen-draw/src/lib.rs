//! Rendering of compiled automata as ASCII art or SVG.
//!
//! This crate is a pure consumer of [`lexgen::graph::GraphArtifact`]: node
//! count, edges, and a per-node accepting-rule mapping. It knows nothing
//! about regex syntax, rule priority, or scanning — the pipeline that
//! produced the graph is none of its concern.

pub mod ascii;
pub mod layout;
pub mod pos2;
pub mod svg;

use lexgen::graph::GraphArtifact;
use pos2::Pos2;

/// Backend abstraction for rendering a laid-out graph. A renderer
/// implements this once per output format; [`draw_graph`] drives any
/// implementation identically.
pub trait Drawer {
    fn start_drawing(&mut self);
    fn finish_drawing(&mut self);
    fn draw_circle(&mut self, pos: Pos2, radius: f32, thickness: f32);
    fn draw_centered_text(&mut self, pos: Pos2, text: &str);
    fn draw_line(&mut self, from: Pos2, to: Pos2, thickness: f32);
    fn set_color(&mut self, _rgb: [u8; 3]) {}
}

/// Offsets and scales every coordinate passed to an inner [`Drawer`] —
/// used to fit a layout computed in arbitrary units into a fixed canvas.
pub struct OffsetScaleDrawer<'a, T> {
    pub offset: Pos2,
    pub scale: Pos2,
    pub drawer: &'a mut T,
}

impl<'a, T: Drawer> Drawer for OffsetScaleDrawer<'a, T> {
    fn start_drawing(&mut self) {
        self.drawer.start_drawing()
    }

    fn finish_drawing(&mut self) {
        self.drawer.finish_drawing()
    }

    fn draw_circle(&mut self, pos: Pos2, radius: f32, thickness: f32) {
        self.drawer
            .draw_circle((pos + self.offset) * self.scale, radius * self.scale.x, thickness)
    }

    fn draw_centered_text(&mut self, pos: Pos2, text: &str) {
        self.drawer.draw_centered_text((pos + self.offset) * self.scale, text)
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, thickness: f32) {
        self.drawer
            .draw_line((from + self.offset) * self.scale, (to + self.offset) * self.scale, thickness)
    }

    fn set_color(&mut self, rgb: [u8; 3]) {
        self.drawer.set_color(rgb)
    }
}

const NODE_RADIUS: f32 = 0.8;

/// Lays `graph` out with [`layout::force_layout`] and issues the draw
/// calls for its nodes (accepting states get a double ring) and edges
/// (labeled with the byte or byte-range each one fires on). `rule_name`
/// turns an accepting state's winning rule index into a label.
pub fn draw_graph(graph: &GraphArtifact, drawer: &mut impl Drawer, rule_name: impl Fn(usize) -> String) {
    let positions = layout::force_layout(graph);

    drawer.start_drawing();

    for edge in &graph.edges {
        let from = positions[edge.src];
        let to = positions[edge.dst];
        drawer.draw_line(from, to, 1.0);
        let mid = (from + to) * 0.5;
        drawer.draw_centered_text(mid, &label_text(edge.label.bytes()));
    }

    for (id, pos) in positions.iter().enumerate() {
        drawer.draw_circle(*pos, NODE_RADIUS, 1.0);
        if let Some(rule) = graph.accepting[id] {
            drawer.draw_circle(*pos, NODE_RADIUS * 0.75, 1.0);
            drawer.draw_centered_text(*pos, &format!("{id}:{}", rule_name(rule)));
        } else {
            drawer.draw_centered_text(*pos, &id.to_string());
        }
    }

    drawer.finish_drawing();
}

/// Condenses a byte set to a short label: a single printable byte, a
/// compact range, or `n bytes` once it stops being legible.
fn label_text(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "ε".to_string();
    }
    let printable = |b: u8| -> String {
        if (0x20..=0x7e).contains(&b) {
            (b as char).to_string()
        } else {
            format!("\\x{b:02x}")
        }
    };
    if bytes.len() == 1 {
        return printable(bytes[0]);
    }
    let mut sorted = bytes.to_vec();
    sorted.sort_unstable();
    let is_contiguous_range = sorted.windows(2).all(|w| w[1] == w[0] + 1);
    if is_contiguous_range {
        format!("{}-{}", printable(sorted[0]), printable(*sorted.last().unwrap()))
    } else {
        format!("{} bytes", bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::AsciiArtDrawer;
    use crate::svg::SvgDrawer;
    use lexgen::Lexer;

    fn sample_artifact() -> GraphArtifact {
        let lexer = Lexer::compile(&[(br"[0-9]+".as_slice(), "integer")], 100).unwrap();
        lexer.dfa().graph_artifact()
    }

    #[test]
    fn ascii_backend_places_every_node() {
        let artifact = sample_artifact();
        let mut drawer = AsciiArtDrawer::new(80, 40);
        let mut offset = OffsetScaleDrawer {
            offset: pos2::pos2(40.0, 20.0),
            scale: pos2::pos2(1.0, 1.0),
            drawer: &mut drawer,
        };
        draw_graph(&artifact, &mut offset, |r| r.to_string());
        let rendered = drawer.render();
        assert!(rendered.contains('o'));
    }

    #[test]
    fn svg_backend_emits_one_circle_per_node() {
        let artifact = sample_artifact();
        let mut drawer = SvgDrawer::new(200.0, 200.0);
        let mut offset = OffsetScaleDrawer {
            offset: pos2::pos2(100.0, 100.0),
            scale: pos2::pos2(4.0, 4.0),
            drawer: &mut drawer,
        };
        draw_graph(&artifact, &mut offset, |r| r.to_string());
        let svg = drawer.to_svg_string();
        let circle_count = svg.matches("<circle").count();
        assert_eq!(circle_count, artifact.node_count * 2 - 1); // accepting state draws a second ring
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn label_text_condenses_ranges() {
        assert_eq!(label_text(&[b'0', b'1', b'2', b'3']), "0-3");
        assert_eq!(label_text(&[b'a']), "a");
        assert_eq!(label_text(&[]), "ε");
    }
}
