//! Cell Buffer
//!
//! A 2D grid of cells mirroring the visible terminal area. All writes are
//! bounds-checked and silently absorbed when offscreen, matching terminal
//! drawing semantics where offscreen output is harmless.

use super::cell::{Cell, Style};
use super::geometry::Rect;

/// The in-memory cell grid
#[derive(Debug, Clone)]
pub struct CellBuffer {
    /// Rows of cells, `rows.len() == num_rows`, each row `cols` wide
    rows: Vec<Vec<Cell>>,
    cols: usize,
    num_rows: usize,
}

impl CellBuffer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| vec![Cell::default(); cols]).collect(),
            cols,
            num_rows: rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Write one cell. Out-of-bounds coordinates (including negative ones)
    /// are a no-op, never an error.
    pub fn set(&mut self, x: i32, y: i32, style: Style, glyph: char) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self
            .rows
            .get_mut(y as usize)
            .and_then(|r| r.get_mut(x as usize))
        {
            *cell = Cell::new(glyph, style);
        }
    }

    /// Read one cell, or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize).and_then(|r| r.get(x as usize))
    }

    /// Fill every cell in the closed rectangle with the given style and
    /// glyph. The rectangle is normalized first, so corner order does not
    /// matter; parts outside the buffer are clipped.
    pub fn fill_rect(&mut self, rect: Rect, style: Style, glyph: char) {
        for (x, y) in rect.cells() {
            self.set(x, y, style, glyph);
        }
    }

    /// Reset every cell to the default style and blank glyph
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            for cell in row {
                cell.clear();
            }
        }
    }

    /// Resize the grid to the terminal's new size, preserving the content
    /// of cells that survive the resize.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        for row in &mut self.rows {
            row.resize(cols, Cell::default());
        }

        use std::cmp::Ordering;
        match rows.cmp(&self.num_rows) {
            Ordering::Greater => {
                for _ in self.num_rows..rows {
                    self.rows.push(vec![Cell::default(); cols]);
                }
            }
            Ordering::Less => {
                self.rows.truncate(rows);
            }
            Ordering::Equal => {}
        }

        self.cols = cols;
        self.num_rows = rows;
    }
}
