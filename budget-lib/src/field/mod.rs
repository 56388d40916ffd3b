//! Searchable choice field: a text input bound to a prefix-filtered popup.

mod filter;
mod surface;

pub use filter::{FilterMatch, normalize, prefix_filter};
pub use surface::{InputSurface, Placement, SelectionSurface};

use log::trace;

/// Visibility of the selection surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Keeps a selection surface in sync with free-text input against a fixed
/// candidate list, and writes a chosen candidate back into the input.
///
/// # Example
///
/// ```ignore
/// let mut field = FilterableChoiceField::new(catalog.items.clone(), entry, popup);
///
/// field.on_focus_gained();      // popup shows every candidate
/// field.input_mut().set_text("ap");
/// field.on_text_changed();      // popup shows "Apple", "Apricot"
/// field.on_item_chosen(Some(0)); // entry now reads "Apple", popup hidden
/// ```
#[derive(Debug)]
pub struct FilterableChoiceField<I, S> {
    candidates: Vec<String>,
    /// Indices into `candidates` currently shown by the selection surface.
    view: Vec<FilterMatch>,
    state: DropdownState,
    input: I,
    selection: S,
}

impl<I: InputSurface, S: SelectionSurface> FilterableChoiceField<I, S> {
    /// Bind `input` and `selection` to `candidates`.
    ///
    /// The selection surface starts out holding every candidate and hidden.
    pub fn new(candidates: Vec<String>, input: I, mut selection: S) -> Self {
        selection.clear();
        for candidate in &candidates {
            selection.append(candidate);
        }
        selection.hide();

        let view = prefix_filter("", &candidates);
        Self {
            candidates,
            view,
            state: DropdownState::Closed,
            input,
            selection,
        }
    }

    /// Refilter against the current input text and show the result.
    ///
    /// An empty result still leaves the (empty) surface visible.
    pub fn on_text_changed(&mut self) {
        let text = self.input.text();
        self.view = prefix_filter(&text, &self.candidates);
        trace!(
            "Filtered {:?}: {} of {} candidates",
            text,
            self.view.len(),
            self.candidates.len()
        );

        self.selection.clear();
        for m in &self.view {
            self.selection.append(&self.candidates[m.index]);
        }
        self.open();
    }

    pub fn on_focus_gained(&mut self) {
        self.open();
    }

    pub fn on_focus_lost(&mut self) {
        self.close();
    }

    pub fn on_selection_committed(&mut self) {
        self.close();
    }

    /// Commit the displayed item at `index` into the input.
    ///
    /// `None` or an index outside the displayed matches leaves everything
    /// untouched.
    pub fn on_item_chosen(&mut self, index: Option<usize>) {
        let Some(m) = index.and_then(|i| self.view.get(i)) else {
            trace!("Ignoring choice {:?} outside {} matches", index, self.view.len());
            return;
        };

        let chosen = &self.candidates[m.index];
        trace!("Chose {:?}", chosen);
        self.input.set_text(chosen);
        self.close();
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Items the selection surface currently displays, in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &str> + '_ {
        self.view.iter().map(|m| self.candidates[m.index].as_str())
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut S {
        &mut self.selection
    }

    fn open(&mut self) {
        let placement = Placement::below(self.input.anchor(), self.selection.rows());
        self.selection.show(placement);
        self.state = DropdownState::Open;
    }

    fn close(&mut self) {
        self.selection.hide();
        self.state = DropdownState::Closed;
    }
}
