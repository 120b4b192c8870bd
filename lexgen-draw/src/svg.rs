//! SVG rendering backend. No raster or font-metrics crate appears
//! anywhere in the retrieval pack this crate was grounded on, so this
//! backend emits plain SVG markup by hand — a legitimate choice since SVG
//! is itself a text format, unlike a PNG or similar rasterized output.

use crate::pos2::Pos2;
use crate::Drawer;
use std::fmt::Write as _;

pub struct SvgDrawer {
    width: f32,
    height: f32,
    color: String,
    body: String,
}

impl SvgDrawer {
    pub fn new(width: f32, height: f32) -> Self {
        SvgDrawer {
            width,
            height,
            color: "black".to_string(),
            body: String::new(),
        }
    }

    pub fn to_svg_string(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl Drawer for SvgDrawer {
    fn start_drawing(&mut self) {
        self.body.clear();
    }

    fn finish_drawing(&mut self) {}

    fn draw_circle(&mut self, pos: Pos2, radius: f32, thickness: f32) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
            pos.x, pos.y, radius, self.color, thickness
        );
    }

    fn draw_centered_text(&mut self, pos: Pos2, text: &str) {
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"{}\" font-size=\"0.6\">{}</text>",
            pos.x,
            pos.y,
            self.color,
            escape(text)
        );
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, thickness: f32) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
            from.x, from.y, to.x, to.y, self.color, thickness
        );
    }

    fn set_color(&mut self, rgb: [u8; 3]) {
        self.color = format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]);
    }
}
