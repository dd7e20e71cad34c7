//! Projects the retained scene onto terminal cells

use std::io::{self, Write};
use std::ops::Range;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use game_core::{Color, Drawable, Playfield, Scene, Shape};

/// Field units covered by one terminal cell
pub const CELL_WIDTH: i32 = 10;
pub const CELL_HEIGHT: i32 = 20;

/// Display size in field units for a terminal of `cols` x `rows` cells
pub fn display_size(cols: u16, rows: u16) -> (i32, i32) {
    (i32::from(cols) * CELL_WIDTH, i32::from(rows) * CELL_HEIGHT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// One frame worth of terminal cells
#[derive(Debug, Clone)]
pub struct Frame {
    cols: usize,
    rows: usize,
    cells: Vec<Option<Cell>>,
}

impl Frame {
    pub fn new(cols: u16, rows: u16) -> Self {
        let (cols, rows) = (usize::from(cols), usize::from(rows));
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn from_scene(scene: &Scene, cols: u16, rows: u16) -> Self {
        let mut frame = Self::new(cols, rows);
        for drawable in scene.drawables() {
            frame.paint(&drawable);
        }
        frame
    }

    /// Fill every cell the shape's box touches
    pub fn paint(&mut self, drawable: &Drawable) {
        let glyph = match drawable.shape {
            Shape::Rectangle => '█',
            Shape::Ellipse => '●',
        };
        let cell = Cell {
            glyph,
            color: drawable.color,
        };

        let b = drawable.bounds;
        let rows = span(b.min.y, b.max.y, CELL_HEIGHT, self.rows);
        for row in rows {
            for col in span(b.min.x, b.max.x, CELL_WIDTH, self.cols) {
                self.cells[row * self.cols + col] = Some(cell);
            }
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[Option<Cell>] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Cells covered by `[min, max)` in field units, clipped to `limit`
fn span(min: i32, max: i32, cell: i32, limit: usize) -> Range<usize> {
    let limit = limit as i32;
    let start = (min.max(0) / cell).min(limit);
    let end = ((max + cell - 1) / cell).clamp(0, limit);
    start as usize..end.max(start) as usize
}

/// Terminal row where the floor line sits, if it is on screen
pub fn floor_row(field: &Playfield, rows: u16) -> Option<u16> {
    let row = field.height / CELL_HEIGHT;
    u16::try_from(row).ok().filter(|r| *r < rows)
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::White => style::Color::White,
        Color::Red => style::Color::Red,
        Color::Blue => style::Color::Blue,
    }
}

/// Write a whole frame, the header line and the floor
pub fn draw<W: Write>(
    out: &mut W,
    frame: &Frame,
    header: &str,
    floor: Option<u16>,
) -> io::Result<()> {
    queue!(out, SetBackgroundColor(style::Color::Black))?;

    for row in 0..frame.rows() {
        queue!(out, MoveTo(0, row as u16))?;
        let mut current = None;
        for cell in frame.row(row) {
            match cell {
                Some(cell) => {
                    if current != Some(cell.color) {
                        queue!(out, SetForegroundColor(term_color(cell.color)))?;
                        current = Some(cell.color);
                    }
                    queue!(out, Print(cell.glyph))?;
                }
                None => queue!(out, Print(' '))?,
            }
        }
    }

    queue!(
        out,
        SetForegroundColor(style::Color::DarkGrey),
        MoveTo(0, 0),
        Print(header)
    )?;
    if let Some(row) = floor {
        queue!(out, MoveTo(0, row), Print("─".repeat(frame.cols)))?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Aabb, RenderSurface};
    use glam::IVec2;

    fn drawable(shape: Shape, x: i32, y: i32, w: i32, h: i32, color: Color) -> Drawable {
        Drawable {
            shape,
            bounds: Aabb::from_origin_size(IVec2::new(x, y), IVec2::new(w, h)),
            color,
        }
    }

    #[test]
    fn test_display_size() {
        assert_eq!(display_size(80, 40), (800, 800));
    }

    #[test]
    fn test_paddle_covers_cells() {
        let mut frame = Frame::new(80, 30);
        frame.paint(&drawable(Shape::Rectangle, 50, 240, 20, 100, Color::Red));

        assert_eq!(frame.get(4, 12), None);
        assert_eq!(frame.get(5, 12).map(|c| c.color), Some(Color::Red));
        assert_eq!(frame.get(6, 16).map(|c| c.glyph), Some('█'));
        assert_eq!(frame.get(7, 12), None);
        assert_eq!(frame.get(5, 17), None);
    }

    #[test]
    fn test_unaligned_ball_spills_into_next_cell() {
        let mut frame = Frame::new(80, 30);
        frame.paint(&drawable(Shape::Ellipse, 395, 295, 20, 20, Color::White));

        for (col, row) in [(39, 14), (41, 14), (39, 15), (41, 15)] {
            assert_eq!(frame.get(col, row).map(|c| c.glyph), Some('●'));
        }
        assert_eq!(frame.get(42, 14), None);
        assert_eq!(frame.get(39, 16), None);
    }

    #[test]
    fn test_shapes_are_clipped_to_frame() {
        let mut frame = Frame::new(10, 5);
        frame.paint(&drawable(Shape::Rectangle, -30, -30, 200, 500, Color::Blue));
        assert_eq!(frame.get(0, 0).map(|c| c.color), Some(Color::Blue));
        assert_eq!(frame.get(9, 4).map(|c| c.color), Some(Color::Blue));

        let mut off_screen = Frame::new(10, 5);
        off_screen.paint(&drawable(Shape::Ellipse, 500, 500, 20, 20, Color::White));
        assert!((0..5).all(|row| off_screen.row(row).iter().all(Option::is_none)));
    }

    #[test]
    fn test_from_scene_paints_all_shapes() {
        let mut scene = Scene::new();
        scene.create_shape(
            Shape::Rectangle,
            Aabb::from_origin_size(IVec2::new(0, 0), IVec2::new(10, 20)),
            Color::Red,
        );
        scene.create_shape(
            Shape::Ellipse,
            Aabb::from_origin_size(IVec2::new(20, 0), IVec2::new(10, 20)),
            Color::White,
        );

        let frame = Frame::from_scene(&scene, 4, 2);
        assert_eq!(frame.get(0, 0).map(|c| c.color), Some(Color::Red));
        assert_eq!(frame.get(2, 0).map(|c| c.color), Some(Color::White));
        assert_eq!(frame.get(1, 0), None);
    }

    #[test]
    fn test_floor_row() {
        let field = Playfield::new(800, 600, 40);
        assert_eq!(floor_row(&field, 40), Some(30));
        assert_eq!(floor_row(&field, 30), None);
    }

    #[test]
    fn test_draw_writes_header_and_glyphs() {
        let mut frame = Frame::new(4, 2);
        frame.paint(&drawable(Shape::Rectangle, 0, 20, 10, 20, Color::Red));

        let mut out = Vec::new();
        draw(&mut out, &frame, "PONG", Some(1)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("PONG"));
        assert!(text.contains('█'));
        assert!(text.contains('─'));
    }
}
