//! Popup list shown beneath an entry.

use budget_lib::{Placement, Rect, SelectionSurface};
use crossterm::style::Color;

use crate::canvas::{Canvas, CellStyle};

/// A scrolling list of rows with an optional highlighted row.
#[derive(Debug, Clone)]
pub struct Popup {
    items: Vec<String>,
    rows: u16,
    placement: Option<Placement>,
    highlighted: Option<usize>,
    /// Index of the first visible row.
    offset: usize,
}

impl Popup {
    pub fn new(rows: u16) -> Self {
        Self {
            items: Vec::new(),
            rows: rows.max(1),
            placement: None,
            highlighted: None,
            offset: 0,
        }
    }

    #[cfg(test)]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn area(&self) -> Option<Rect> {
        self.placement.map(|p| p.area)
    }

    pub fn highlight_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.highlighted {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.highlight(next);
    }

    pub fn highlight_prev(&mut self) {
        if let Some(i) = self.highlighted {
            self.highlight(i.saturating_sub(1));
        }
    }

    fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
        let rows = self.rows as usize;
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + rows {
            self.offset = index + 1 - rows;
        }
    }

    /// Item index under a screen position, if the popup is visible there.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.area()?;
        if !area.contains(x, y) {
            return None;
        }
        let index = self.offset + (y - area.y) as usize;
        (index < self.items.len()).then_some(index)
    }

    pub fn render(&self, canvas: &mut Canvas) {
        let Some(area) = self.area() else { return };

        let base = CellStyle::default().fg(Color::Black).bg(Color::Grey);
        let selected = CellStyle::default().fg(Color::White).bg(Color::Blue).bold();
        canvas.fill(area, base);

        let visible = self.items.iter().enumerate().skip(self.offset);
        for (row, (index, item)) in visible.take(area.height as usize).enumerate() {
            let style = if self.highlighted == Some(index) {
                selected
            } else {
                base
            };
            let y = area.y + row as u16;
            canvas.fill(Rect::new(area.x, y, area.width, 1), style);
            canvas.put_str(area.x, y, item, area.width, style);
        }
    }
}

impl SelectionSurface for Popup {
    fn clear(&mut self) {
        self.items.clear();
        self.highlighted = None;
        self.offset = 0;
    }

    fn append(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    fn show(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    fn hide(&mut self) {
        self.placement = None;
        self.highlighted = None;
        self.offset = 0;
    }

    fn is_visible(&self) -> bool {
        self.placement.is_some()
    }

    fn rows(&self) -> u16 {
        self.rows
    }
}
