//! Terminal setup, teardown and diffed drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::canvas::{Canvas, CellStyle};

/// Owns the terminal while the app runs and restores it on drop or panic.
pub struct TerminalGuard {
    stdout: Stdout,
    current: Canvas,
    previous: Canvas,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let setup = (|| -> io::Result<(Stdout, u16, u16)> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
            let (width, height) = terminal::size()?;
            Ok((stdout, width, height))
        })();
        let (stdout, width, height) = undo_on_error(setup, || {
            let _ = restore_terminal();
        })?;

        Ok(Self {
            stdout,
            current: Canvas::new(width, height),
            previous: Canvas::new(width, height),
        })
    }

    /// Render a frame with `paint` and write only the cells that changed.
    ///
    /// `paint` returns where the text cursor belongs, if anywhere.
    pub fn draw<F>(&mut self, paint: F) -> io::Result<()>
    where
        F: FnOnce(&mut Canvas) -> Option<(u16, u16)>,
    {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Canvas::new(width, height);
            self.previous = Canvas::new(width, height);
            queue!(self.stdout, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        }

        self.current.clear();
        let cursor_at = paint(&mut self.current);

        self.flush_diff()?;
        match cursor_at {
            Some((x, y)) => queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?,
            None => queue!(self.stdout, cursor::Hide)?,
        }
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16)> = None;
        let mut style = CellStyle::default();

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Reset),
            SetBackgroundColor(Color::Reset)
        )?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.continuation {
                continue;
            }

            let sequential = matches!(last, Some((lx, ly)) if ly == y && lx + 1 == x);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.style != style {
                apply_style(&mut self.stdout, &cell.style)?;
                style = cell.style;
            }

            queue!(self.stdout, Print(cell.ch))?;
            // a wide glyph leaves the terminal cursor past its continuation cell
            let advance = if self.current.get(x + 1, y).is_some_and(|c| c.continuation) {
                x + 1
            } else {
                x
            };
            last = Some((advance, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Run `undo` when `result` is an error, then pass `result` through.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn apply_style(out: &mut impl Write, style: &CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(style.fg),
        SetBackgroundColor(style.bg)
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
