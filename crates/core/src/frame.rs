//! Character frame produced by each render pass.

use std::fmt;

use crate::types::EMPTY_SYMBOL;

/// 2D grid of display characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Frame {
    /// Create a frame filled with the empty symbol.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_SYMBOL; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Reset every cell to the empty symbol.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_SYMBOL);
    }

    /// Write `len` copies of `ch` down column `x` starting at row `top`, clipped to the frame.
    pub fn fill_column(&mut self, x: usize, top: usize, len: usize, ch: char) {
        for y in top..top.saturating_add(len).min(self.height) {
            self.set(x, y, ch);
        }
    }

    /// Whether column `x` holds only the empty symbol.
    pub fn column_is_empty(&self, x: usize) -> bool {
        (0..self.height).all(|y| self.get(x, y) == Some(EMPTY_SYMBOL))
    }

    /// Iterate rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Render as text, rows joined by newlines.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
