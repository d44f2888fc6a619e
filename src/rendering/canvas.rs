use macroquad::prelude::*;

use super::{Quad, Segment};

/// Drawing surface the renderer emits primitives into.
/// Coordinates are screen pixels, origin top-left, Y down.
pub trait Canvas {
    fn clear(&mut self);
    fn fill_quad(&mut self, quad: &Quad);
    fn line(&mut self, segment: &Segment);
}

/// Canvas backed by macroquad's immediate-mode drawing.
/// Presenting is left to the caller's `next_frame().await`.
pub struct MacroquadCanvas {
    background: Color,
    cell_color: Color,
    grid_color: Color,
    line_thickness: f32,
}

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self {
            background: WHITE,
            cell_color: BLACK,
            grid_color: Color::new(0.5, 0.5, 0.5, 1.0),
            line_thickness: 1.0,
        }
    }
}

impl Default for MacroquadCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self) {
        clear_background(self.background);
    }

    fn fill_quad(&mut self, quad: &Quad) {
        let origin = quad.top_left();
        let size = quad.size();
        draw_rectangle(origin.x, origin.y, size.x, size.y, self.cell_color);
    }

    fn line(&mut self, segment: &Segment) {
        draw_line(
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            self.line_thickness,
            self.grid_color,
        );
    }
}
