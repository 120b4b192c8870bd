//! ASCII-art rendering backend: draw calls paint into a `Vec<Vec<char>>`
//! text-grid canvas that is joined into lines on [`AsciiArtDrawer::render`].

use crate::pos2::Pos2;
use crate::Drawer;

pub struct AsciiArtDrawer {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl AsciiArtDrawer {
    pub fn new(width: usize, height: usize) -> Self {
        AsciiArtDrawer {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    fn put(&mut self, x: i64, y: i64, c: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if y < self.height && x < self.width {
            self.cells[y][x] = c;
        }
    }

    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Drawer for AsciiArtDrawer {
    fn start_drawing(&mut self) {}

    fn finish_drawing(&mut self) {}

    fn draw_circle(&mut self, pos: Pos2, radius: f32, _thickness: f32) {
        let steps = 24;
        for i in 0..steps {
            let theta = 2.0 * std::f32::consts::PI * i as f32 / steps as f32;
            let x = pos.x + radius * theta.cos();
            let y = pos.y + radius * theta.sin();
            self.put(x.round() as i64, y.round() as i64, 'o');
        }
    }

    fn draw_centered_text(&mut self, pos: Pos2, text: &str) {
        let start_x = pos.x.round() as i64 - text.len() as i64 / 2;
        for (i, c) in text.chars().enumerate() {
            self.put(start_x + i as i64, pos.y.round() as i64, c);
        }
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, _thickness: f32) {
        let steps = (from.x - to.x).abs().max((from.y - to.y).abs()).round() as i64;
        let steps = steps.max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.put(x.round() as i64, y.round() as i64, '.');
        }
    }
}
