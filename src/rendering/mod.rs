mod canvas;

pub use canvas::{Canvas, MacroquadCanvas};

use macroquad::math::{Vec2, vec2};
use tracing::trace;

use crate::application::Simulation;
use crate::domain::Field;

/// Axis-aligned filled quad, corners clockwise from the top-left
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub corners: [Vec2; 4],
}

impl Quad {
    pub fn top_left(&self) -> Vec2 {
        self.corners[0]
    }

    pub fn size(&self) -> Vec2 {
        self.corners[2] - self.corners[0]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

/// Fixed mapping from field cells to screen rectangles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    col_width: f32,
    row_height: f32,
    field_width: usize,
    field_height: usize,
}

impl Viewport {
    pub fn new(
        screen_width: f32,
        screen_height: f32,
        field_width: usize,
        field_height: usize,
    ) -> Self {
        Self {
            col_width: screen_width / field_width as f32,
            row_height: screen_height / field_height as f32,
            field_width,
            field_height,
        }
    }

    pub fn for_field(screen_width: f32, screen_height: f32, field: &Field) -> Self {
        let (w, h) = field.dimensions();
        Self::new(screen_width, screen_height, w, h)
    }

    /// Screen size of a single cell
    pub fn cell_size(&self) -> Vec2 {
        vec2(self.col_width, self.row_height)
    }

    fn point(&self, col: usize, row: usize) -> Vec2 {
        vec2(col as f32 * self.col_width, row as f32 * self.row_height)
    }

    /// Screen rectangle covered by cell (col, row)
    pub fn cell_quad(&self, col: usize, row: usize) -> Quad {
        Quad {
            corners: [
                self.point(col, row),
                self.point(col + 1, row),
                self.point(col + 1, row + 1),
                self.point(col, row + 1),
            ],
        }
    }

    /// Vertical line on the left edge of column `col`, full field height
    pub fn column_line(&self, col: usize) -> Segment {
        Segment {
            start: self.point(col, 0),
            end: self.point(col, self.field_height),
        }
    }

    /// Horizontal line on the top edge of row `row`, full field width
    pub fn row_line(&self, row: usize) -> Segment {
        Segment {
            start: self.point(0, row),
            end: self.point(self.field_width, row),
        }
    }
}

/// Emit one filled quad per live cell
pub fn render_field(field: &Field, viewport: &Viewport, canvas: &mut impl Canvas) {
    field
        .live_cells()
        .for_each(|(col, row)| canvas.fill_quad(&viewport.cell_quad(col, row)));
}

/// Emit the grid overlay unless hidden
pub fn render_grid(viewport: &Viewport, hide: bool, canvas: &mut impl Canvas) {
    if hide {
        return;
    }
    (0..viewport.field_width).for_each(|col| canvas.line(&viewport.column_line(col)));
    (0..viewport.field_height).for_each(|row| canvas.line(&viewport.row_line(row)));
}

/// Clear, then draw cells and overlay. Never mutates the simulation.
pub fn render_frame(simulation: &Simulation, viewport: &Viewport, canvas: &mut impl Canvas) {
    trace!(generation = simulation.field.generation(), "draw");
    canvas.clear();
    render_field(&simulation.field, viewport, canvas);
    render_grid(viewport, simulation.hide_grid, canvas);
}
