//! In-memory grid of styled cells that screens draw into.

use budget_lib::Rect;
use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub fn fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    pub fn bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
    /// Right half of a double-width character drawn in the cell before.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
            continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Paint every cell of `area` blank in `style`.
    pub fn fill(&mut self, area: Rect, style: CellStyle) {
        let area = area.clamp_to(self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(
                    x,
                    y,
                    Cell {
                        style,
                        ..Cell::default()
                    },
                );
            }
        }
    }

    /// Draw `text` starting at (`x`, `y`), using at most `max_width` columns.
    ///
    /// Returns the number of columns written. A double-width character that
    /// would straddle the limit is left out.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: CellStyle) -> u16 {
        let mut used: u16 = 0;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            if used + width > max_width {
                break;
            }

            let col = x.saturating_add(used);
            self.set(
                col,
                y,
                Cell {
                    ch,
                    style,
                    continuation: false,
                },
            );
            if width == 2 {
                self.set(
                    col.saturating_add(1),
                    y,
                    Cell {
                        ch: ' ',
                        style,
                        continuation: true,
                    },
                );
            }
            used += width;
        }
        used
    }

    /// Cells that differ from `other`, which must have the same size.
    pub fn diff<'a>(&'a self, other: &'a Canvas) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}
