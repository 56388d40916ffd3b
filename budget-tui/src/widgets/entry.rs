//! Single-line text entry.

use budget_lib::{InputSurface, Rect};
use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

use crate::canvas::{Canvas, CellStyle};
use crate::keys::{Key, KeyInput};

/// Result of handling a key in an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Entry {
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    area: Rect,
    focused: bool,
}

impl Entry {
    pub fn new(area: Rect) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            area,
            focused: false,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn handle_key(&mut self, input: KeyInput) -> EditResult {
        let mods = input.modifiers;
        if mods.ctrl || mods.alt {
            return EditResult::Ignored;
        }

        match input.key {
            Key::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                EditResult::Changed
            }
            Key::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                EditResult::Changed
            }
            Key::Delete if self.cursor < self.char_count() => {
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                EditResult::Changed
            }
            Key::Backspace | Key::Delete => EditResult::Handled,
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EditResult::Handled
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                EditResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                EditResult::Handled
            }
            Key::End => {
                self.cursor = self.char_count();
                EditResult::Handled
            }
            _ => EditResult::Ignored,
        }
    }

    /// First character shown, so the cursor stays inside the entry.
    ///
    /// Counts display columns, leaving one free for the cursor itself.
    fn scroll(&self) -> usize {
        let budget = self.area.width.saturating_sub(1) as usize;
        let before: Vec<usize> = self
            .text
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .collect();

        let mut used = 0;
        let mut start = before.len();
        for width in before.iter().rev() {
            if used + width > budget {
                break;
            }
            used += width;
            start -= 1;
        }
        start
    }

    /// Screen position of the text cursor.
    pub fn cursor_position(&self) -> (u16, u16) {
        let scroll = self.scroll();
        let column: usize = self
            .text
            .chars()
            .skip(scroll)
            .take(self.cursor - scroll)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (self.area.x.saturating_add(column as u16), self.area.y)
    }

    pub fn render(&self, canvas: &mut Canvas) {
        let style = if self.focused {
            CellStyle::default().fg(Color::White).bg(Color::DarkBlue)
        } else {
            CellStyle::default().fg(Color::Grey).bg(Color::DarkGrey)
        };
        canvas.fill(self.area, style);

        let shown: String = self.text.chars().skip(self.scroll()).collect();
        canvas.put_str(self.area.x, self.area.y, &shown, self.area.width, style);
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl InputSurface for Entry {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    fn anchor(&self) -> Rect {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(entry: &mut Entry, text: &str) {
        for c in text.chars() {
            assert_eq!(entry.handle_key(KeyInput::new(Key::Char(c))), EditResult::Changed);
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut entry = Entry::new(Rect::new(0, 0, 10, 1));
        typed(&mut entry, "kiwi");
        assert_eq!(entry.text(), "kiwi");

        assert_eq!(entry.handle_key(KeyInput::new(Key::Backspace)), EditResult::Changed);
        assert_eq!(entry.text(), "kiw");
        assert_eq!(entry.cursor(), 3);
    }

    #[test]
    fn test_edit_in_middle() {
        let mut entry = Entry::new(Rect::new(0, 0, 10, 1));
        typed(&mut entry, "yuz");
        entry.handle_key(KeyInput::new(Key::Home));
        entry.handle_key(KeyInput::new(Key::Delete));
        assert_eq!(entry.text(), "uz");

        entry.handle_key(KeyInput::new(Key::End));
        typed(&mut entry, "u");
        entry.handle_key(KeyInput::new(Key::Left));
        entry.handle_key(KeyInput::new(Key::Left));
        typed(&mut entry, "y");
        assert_eq!(entry.text(), "uyzu");
    }

    #[test]
    fn test_backspace_at_start_is_handled_not_changed() {
        let mut entry = Entry::new(Rect::new(0, 0, 10, 1));
        assert_eq!(entry.handle_key(KeyInput::new(Key::Backspace)), EditResult::Handled);
        assert_eq!(entry.handle_key(KeyInput::new(Key::Delete)), EditResult::Handled);
    }

    #[test]
    fn test_multibyte_text() {
        let mut entry = Entry::new(Rect::new(0, 0, 10, 1));
        typed(&mut entry, "jalapeño");
        entry.handle_key(KeyInput::new(Key::Left));
        entry.handle_key(KeyInput::new(Key::Backspace));
        assert_eq!(entry.text(), "jalapeo");
    }

    #[test]
    fn test_ctrl_keys_ignored() {
        let mut entry = Entry::new(Rect::new(0, 0, 10, 1));
        assert_eq!(entry.handle_key(KeyInput::ctrl('a')), EditResult::Ignored);
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut entry = Entry::new(Rect::new(3, 4, 10, 1));
        entry.set_text("Apple");
        assert_eq!(entry.cursor(), 5);
        assert_eq!(entry.cursor_position(), (8, 4));
        assert_eq!(entry.anchor(), Rect::new(3, 4, 10, 1));
    }

    #[test]
    fn test_wide_chars_place_cursor_by_columns() {
        let mut entry = Entry::new(Rect::new(2, 0, 10, 1));
        entry.set_text("日本");
        assert_eq!(entry.cursor_position(), (6, 0));
    }

    #[test]
    fn test_wide_chars_scroll_by_columns() {
        let mut entry = Entry::new(Rect::new(0, 0, 5, 1));
        entry.set_text("日本語");
        assert_eq!(entry.cursor_position(), (4, 0));

        let mut canvas = Canvas::new(5, 1);
        entry.render(&mut canvas);
        assert_eq!(canvas.get(0, 0).unwrap().ch, '本');
        assert_eq!(canvas.get(2, 0).unwrap().ch, '語');
        assert_eq!(canvas.get(4, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_long_text_scrolls() {
        let mut entry = Entry::new(Rect::new(0, 0, 4, 1));
        entry.set_text("Watermelon");
        assert_eq!(entry.cursor_position(), (3, 0));

        let mut canvas = Canvas::new(6, 1);
        entry.render(&mut canvas);
        let row: String = (0..4).map(|x| canvas.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, "lon ");
    }
}
