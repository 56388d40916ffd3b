use crossterm::style::Color;

use crate::canvas::{Canvas, CellStyle};
use crate::keys::KeyInput;

use super::{Outcome, Screen, ScreenKind};

const LINES: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "move between fields"),
    ("typing", "filter the list by prefix"),
    ("Up / Down", "highlight a match"),
    ("Enter", "take the highlighted match"),
    ("Esc", "close the list"),
    ("click", "focus a field or take a match"),
    ("F1", "toggle this help"),
    ("Ctrl+Q", "quit"),
];

/// Key reference. Any key returns to the main screen.
pub struct HelpScreen;

impl Screen for HelpScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Help
    }

    fn handle_key(&mut self, _input: KeyInput) -> Outcome {
        Outcome::Switch(ScreenKind::Main)
    }

    fn handle_click(&mut self, _x: u16, _y: u16) -> Outcome {
        Outcome::Ignored
    }

    fn render(&self, canvas: &mut Canvas) -> Option<(u16, u16)> {
        let width = canvas.width();
        let title = CellStyle::default().fg(Color::Cyan).bold();
        canvas.put_str(2, 1, "Budget Manager - keys", width.saturating_sub(2), title);

        let key_style = CellStyle::default().bold();
        let text_style = CellStyle::default();
        for (row, (key, what)) in LINES.iter().enumerate() {
            let y = 3 + row as u16;
            canvas.put_str(4, y, key, 18, key_style);
            canvas.put_str(24, y, what, width.saturating_sub(24), text_style);
        }

        let hint = CellStyle::default().dim();
        let y = 4 + LINES.len() as u16;
        canvas.put_str(2, y, "press any key to go back", width.saturating_sub(2), hint);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Key;

    #[test]
    fn test_any_key_returns_to_main() {
        let mut help = HelpScreen;
        for key in [Key::Char('q'), Key::Escape, Key::Enter, Key::F(1), Key::Tab] {
            assert_eq!(
                help.handle_key(KeyInput::new(key)),
                Outcome::Switch(ScreenKind::Main)
            );
        }
    }

    #[test]
    fn test_clicks_ignored() {
        let mut help = HelpScreen;
        assert_eq!(help.handle_click(4, 3), Outcome::Ignored);
    }

    #[test]
    fn test_render_lists_keys_without_cursor() {
        let mut canvas = Canvas::new(60, 16);
        assert_eq!(HelpScreen.render(&mut canvas), None);
        let row: String = (4..7).map(|x| canvas.get(x, 3).unwrap().ch).collect();
        assert_eq!(row, "Tab");
    }
}
