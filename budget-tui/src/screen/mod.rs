//! Screens and the frame that holds the current one.

mod help;
mod main_screen;

pub use help::HelpScreen;
pub use main_screen::MainScreen;

use budget_lib::Settings;
use log::debug;

use crate::canvas::Canvas;
use crate::keys::KeyInput;

/// Which screen to show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Main,
    Help,
}

/// What a screen did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Handled,
    Switch(ScreenKind),
}

/// Build a fresh screen of `kind`.
pub fn build(kind: ScreenKind, settings: &Settings) -> Box<dyn Screen> {
    match kind {
        ScreenKind::Main => Box::new(MainScreen::new(settings)),
        ScreenKind::Help => Box::new(HelpScreen),
    }
}

/// A full-window view the frame can display.
pub trait Screen {
    fn kind(&self) -> ScreenKind;

    fn handle_key(&mut self, input: KeyInput) -> Outcome;

    fn handle_click(&mut self, x: u16, y: u16) -> Outcome;

    /// Draw into `canvas`, returning the text cursor position if one is shown.
    fn render(&self, canvas: &mut Canvas) -> Option<(u16, u16)>;
}

/// Holds exactly one current screen.
///
/// Switching replaces the whole screen value; the previous screen and all of
/// its widgets are dropped during the swap.
pub struct Frame {
    current: Box<dyn Screen>,
}

impl Frame {
    pub fn new(screen: Box<dyn Screen>) -> Self {
        debug!("Frame showing {:?}", screen.kind());
        Self { current: screen }
    }

    /// Replace the current screen.
    pub fn show(&mut self, next: Box<dyn Screen>) {
        let previous = std::mem::replace(&mut self.current, next);
        debug!(
            "Frame switched {:?} -> {:?}",
            previous.kind(),
            self.current.kind()
        );
    }

    pub fn current(&self) -> &dyn Screen {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> &mut dyn Screen {
        self.current.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::keys::Key;

    struct Probe {
        dropped: Rc<Cell<bool>>,
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    impl Screen for Probe {
        fn kind(&self) -> ScreenKind {
            ScreenKind::Help
        }

        fn handle_key(&mut self, _input: KeyInput) -> Outcome {
            Outcome::Ignored
        }

        fn handle_click(&mut self, _x: u16, _y: u16) -> Outcome {
            Outcome::Ignored
        }

        fn render(&self, _canvas: &mut Canvas) -> Option<(u16, u16)> {
            None
        }
    }

    #[test]
    fn test_show_drops_previous_screen() {
        let dropped = Rc::new(Cell::new(false));
        let mut frame = Frame::new(Box::new(Probe {
            dropped: Rc::clone(&dropped),
        }));
        assert!(!dropped.get());

        frame.show(Box::new(MainScreen::new(&Settings::default())));
        assert!(dropped.get());
        assert_eq!(frame.current().kind(), ScreenKind::Main);
    }

    /// Feed a key to the current screen and follow any switch it asks for.
    fn press(frame: &mut Frame, settings: &Settings, key: Key) -> Outcome {
        let outcome = frame.current_mut().handle_key(KeyInput::new(key));
        if let Outcome::Switch(kind) = outcome {
            frame.show(build(kind, settings));
        }
        outcome
    }

    #[test]
    fn test_help_round_trip_rebuilds_main_screen() {
        let settings = Settings::default();
        let mut frame = Frame::new(build(ScreenKind::Main, &settings));

        press(&mut frame, &settings, Key::Tab);
        press(&mut frame, &settings, Key::Char('k'));
        let mut canvas = Canvas::new(100, 30);
        assert!(frame.current().render(&mut canvas).is_some());

        assert_eq!(
            press(&mut frame, &settings, Key::F(1)),
            Outcome::Switch(ScreenKind::Help)
        );
        assert_eq!(frame.current().kind(), ScreenKind::Help);

        assert_eq!(
            press(&mut frame, &settings, Key::Char('x')),
            Outcome::Switch(ScreenKind::Main)
        );
        assert_eq!(frame.current().kind(), ScreenKind::Main);

        // the rebuilt screen starts unfocused with empty entries
        let mut canvas = Canvas::new(100, 30);
        assert_eq!(frame.current().render(&mut canvas), None);
        assert_eq!(canvas.get(2, 4).unwrap().ch, ' ');
        assert_eq!(
            press(&mut frame, &settings, Key::Char('a')),
            Outcome::Ignored
        );
    }
}
