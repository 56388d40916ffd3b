//! Event loop driving the frame.

use budget_lib::Settings;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use log::{debug, info, trace};

use crate::error::AppError;
use crate::keys::KeyInput;
use crate::screen::{self, Frame, Outcome, ScreenKind};
use crate::terminal::TerminalGuard;

pub struct App {
    settings: Settings,
    frame: Frame,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let frame = Frame::new(screen::build(ScreenKind::Main, &settings));
        Self { settings, frame }
    }

    /// Run until the user quits or the terminal fails.
    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = TerminalGuard::new()?;
        let mut events = EventStream::new();
        info!("Event loop started");

        terminal.draw(|canvas| self.frame.current().render(canvas))?;

        while let Some(event) = events.next().await {
            let event = event?;
            trace!("Terminal event {:?}", event);

            let outcome = match event {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let Some(input) = KeyInput::from_event(key) else {
                        continue;
                    };
                    if input.is_quit() {
                        info!("Quit requested");
                        break;
                    }
                    self.frame.current_mut().handle_key(input)
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    self.frame.current_mut().handle_click(mouse.column, mouse.row)
                }
                Event::Resize(width, height) => {
                    debug!("Resized to {}x{}", width, height);
                    Outcome::Handled
                }
                _ => continue,
            };

            if let Outcome::Switch(kind) = outcome {
                self.frame.show(screen::build(kind, &self.settings));
            }

            terminal.draw(|canvas| self.frame.current().render(canvas))?;
        }

        Ok(())
    }
}
