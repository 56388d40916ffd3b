//! Expense entry screen with one searchable field per catalog.

use budget_lib::{FilterableChoiceField, Rect, SelectionSurface, Settings};
use crossterm::style::Color;
use log::debug;

use crate::canvas::{Canvas, CellStyle};
use crate::keys::{Key, KeyInput};
use crate::widgets::{EditResult, Entry, Popup};

use super::{Outcome, Screen, ScreenKind};

type ChoiceField = FilterableChoiceField<Entry, Popup>;

const LEFT: u16 = 2;
const FIRST_ROW: u16 = 3;
/// Label row, entry row, and a blank row between fields.
const ROWS_PER_FIELD: u16 = 3;

const HINT: &str = "Tab: next field  Up/Down: highlight  Enter: choose  Esc: close  F1: help  Ctrl+Q: quit";

struct Slot {
    label: String,
    field: ChoiceField,
}

/// The Budget Manager main screen.
///
/// Fields are independent; only the focused one ever has its list open.
pub struct MainScreen {
    slots: Vec<Slot>,
    focused: Option<usize>,
}

impl MainScreen {
    pub fn new(settings: &Settings) -> Self {
        let slots = settings
            .catalogs
            .iter()
            .enumerate()
            .map(|(i, catalog)| {
                let index = u16::try_from(i).unwrap_or(u16::MAX);
                let y = FIRST_ROW.saturating_add(index.saturating_mul(ROWS_PER_FIELD));
                let entry = Entry::new(Rect::new(
                    LEFT,
                    y.saturating_add(1),
                    settings.field_width,
                    1,
                ));
                Slot {
                    label: catalog.name.clone(),
                    field: FilterableChoiceField::new(
                        catalog.items.clone(),
                        entry,
                        Popup::new(settings.popup_rows),
                    ),
                }
            })
            .collect();

        Self {
            slots,
            focused: None,
        }
    }

    #[cfg(test)]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus, closing the old field's list and opening the new one's.
    fn focus(&mut self, next: Option<usize>) {
        if next == self.focused {
            return;
        }

        if let Some(slot) = self.focused.and_then(|i| self.slots.get_mut(i)) {
            slot.field.input_mut().set_focused(false);
            slot.field.on_focus_lost();
        }
        if let Some(slot) = next.and_then(|i| self.slots.get_mut(i)) {
            slot.field.input_mut().set_focused(true);
            slot.field.on_focus_gained();
        }

        debug!("Focus {:?} -> {:?}", self.focused, next);
        self.focused = next;
    }

    fn cycle_focus(&mut self, forward: bool) {
        let count = self.slots.len();
        if count == 0 {
            return;
        }
        let next = match (self.focused, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.focus(Some(next));
    }

    fn field_key(field: &mut ChoiceField, input: KeyInput) -> Outcome {
        match input.key {
            Key::Down if !field.is_open() => field.on_focus_gained(),
            Key::Down => field.selection_mut().highlight_next(),
            Key::Up if field.is_open() => field.selection_mut().highlight_prev(),
            Key::Enter if field.is_open() => {
                let chosen = field.selection().highlighted();
                field.on_item_chosen(chosen);
            }
            Key::Escape if field.is_open() => field.on_selection_committed(),
            _ => {
                return match field.input_mut().handle_key(input) {
                    EditResult::Changed => {
                        field.on_text_changed();
                        Outcome::Handled
                    }
                    EditResult::Handled => Outcome::Handled,
                    EditResult::Ignored => Outcome::Ignored,
                };
            }
        }
        Outcome::Handled
    }
}

impl Screen for MainScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Main
    }

    fn handle_key(&mut self, input: KeyInput) -> Outcome {
        match input.key {
            Key::F(1) => return Outcome::Switch(ScreenKind::Help),
            Key::Tab => {
                self.cycle_focus(true);
                return Outcome::Handled;
            }
            Key::BackTab => {
                self.cycle_focus(false);
                return Outcome::Handled;
            }
            _ => {}
        }

        match self.focused.and_then(|i| self.slots.get_mut(i)) {
            Some(slot) => Self::field_key(&mut slot.field, input),
            None => Outcome::Ignored,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> Outcome {
        // an open list is drawn over everything else, so it wins the click
        for slot in &mut self.slots {
            let Some(area) = slot.field.selection().area() else {
                continue;
            };
            if !area.contains(x, y) {
                continue;
            }
            // blank rows below the last match still cover whatever is beneath
            if let Some(row) = slot.field.selection().row_at(x, y) {
                slot.field.on_item_chosen(Some(row));
            }
            return Outcome::Handled;
        }

        let hit = self
            .slots
            .iter()
            .position(|slot| slot.field.input().area().contains(x, y));
        self.focus(hit);
        Outcome::Handled
    }

    fn render(&self, canvas: &mut Canvas) -> Option<(u16, u16)> {
        let width = canvas.width();
        let title = CellStyle::default().fg(Color::Cyan).bold();
        canvas.put_str(LEFT, 1, "Budget Manager", width.saturating_sub(LEFT), title);

        let label_style = CellStyle::default();
        for (i, slot) in self.slots.iter().enumerate() {
            let area = slot.field.input().area();
            let style = if self.focused == Some(i) {
                label_style.bold()
            } else {
                label_style
            };
            canvas.put_str(area.x, area.y - 1, &slot.label, area.width, style);
            slot.field.input().render(canvas);
        }

        for slot in &self.slots {
            if slot.field.selection().is_visible() {
                slot.field.selection().render(canvas);
            }
        }

        if let Some(y) = canvas.height().checked_sub(1) {
            let hint = CellStyle::default().dim();
            canvas.put_str(LEFT, y, HINT, width.saturating_sub(LEFT), hint);
        }

        self.focused
            .and_then(|i| self.slots.get(i))
            .map(|slot| slot.field.input().cursor_position())
    }
}
