//! Interactive session: the current text plus the category selection.
//!
//! The session owns the only mutable state. Every mutation replaces a whole
//! value and the next render reads a copy of the selection, so a render
//! always sees either the old selection or the new one.

use crate::event::emit_event;
use crate::highlight::{ByteCategory, Highlight, Selection, highlight_or_placeholder};

/// Text and selection of one interactive view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    input: String,
    selection: Selection,
}

impl Session {
    /// Session with `input` and the default selection.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            selection: Selection::default(),
        }
    }

    /// Session with an explicit selection.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Current text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Highlight the current text with the current selection.
    #[must_use]
    pub fn render(&self) -> Highlight {
        let selection = self.selection;
        highlight_or_placeholder(&self.input, &selection)
    }

    /// Replace the text and return the recomputed result.
    pub fn set_input(&mut self, input: impl Into<String>) -> Highlight {
        self.input = input.into();
        self.render()
    }

    /// Flip one category and return the recomputed result.
    pub fn on_toggle(&mut self, category: ByteCategory, enabled: bool) -> Highlight {
        self.selection = self.selection.toggle(category, enabled);
        emit_event(
            "selection_toggled",
            &format!(
                "{{\"category\":{},\"enabled\":{enabled}}}",
                category.as_u8()
            ),
        );
        self.render()
    }

    /// [`Session::on_toggle`] keyed by the front end's checkbox id.
    ///
    /// Unknown ids leave the selection untouched and return `None`.
    pub fn on_checkbox(&mut self, id: &str, enabled: bool) -> Option<Highlight> {
        ByteCategory::from_id(id).map(|category| self.on_toggle(category, enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_session_uses_default_selection() {
        let session = Session::new("A\u{20BB7}");
        assert_eq!(session.selection(), Selection::default());
        let highlighted: Vec<_> = session
            .render()
            .segments()
            .iter()
            .map(|s| s.highlighted)
            .collect();
        assert_eq!(highlighted, vec![false, true]);
    }

    #[test]
    fn toggle_recomputes() {
        let mut session = Session::new("A\u{20BB7}");
        let result = session.on_toggle(ByteCategory::One, true);
        assert!(result.segments().iter().all(|s| s.highlighted));

        let result = session.on_toggle(ByteCategory::FourPlus, false);
        let highlighted: Vec<_> = result.segments().iter().map(|s| s.highlighted).collect();
        assert_eq!(highlighted, vec![true, false]);
    }

    #[test]
    fn set_input_recomputes_and_empty_gives_marker() {
        let mut session = Session::default();
        assert_eq!(session.render(), Highlight::Empty);
        assert_eq!(session.set_input("\u{3042}").segments().len(), 1);
        assert_eq!(session.set_input(""), Highlight::Empty);
    }

    #[test]
    fn checkbox_ids_map_to_categories() {
        let mut session = Session::new("\u{03B1}");
        let result = session
            .on_checkbox("highlight-2byte-characters", true)
            .unwrap();
        assert!(result.segments()[0].highlighted);
        assert!(session.on_checkbox("highlight-9byte-characters", true).is_none());
        assert!(session.selection().is_enabled(ByteCategory::Two));
    }

    #[test]
    fn toggle_emits_event() {
        let _lock = event::test_lock();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        event::set_event_callback(move |name, data| {
            seen_clone
                .lock()
                .unwrap()
                .push(format!("{name} {data}"));
        });

        let mut session = Session::new("x");
        let _ = session.on_toggle(ByteCategory::Three, true);
        event::clear_event_callback();

        let seen = seen.lock().unwrap();
        assert!(
            seen.iter()
                .any(|e| e == "selection_toggled {\"category\":3,\"enabled\":true}")
        );
    }
}
