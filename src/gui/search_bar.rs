use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

/// Quiet period after the last keystroke before a live search fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Dispatch a lookup for the normalized term.
    Commit(String),
    /// The input was emptied; drop the current session.
    Clear,
}

/// Text input with two triggering policies over the same engine: live
/// search debounced by `DEBOUNCE_DELAY`, and explicit submit (Enter or
/// the Search button) that fires immediately and cancels the pending
/// timer.
pub struct SearchBar {
    query: String,
    pending_since: Option<Instant>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self { query: String::new(), pending_since: None }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<SearchAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Type a word...")
                    .desired_width(ui.available_width() - 80.0),
            );

            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if response.changed() {
                action = self.note_edit(Instant::now());
            }

            if ui.button("Search").clicked() || submitted {
                if let Some(commit) = self.commit_now() {
                    action = Some(commit);
                }
            }
        });

        if action.is_none() {
            action = self.poll(Instant::now());
        }

        // Keep the frame clock ticking so the debounce fires without
        // further input events.
        if self.pending_since.is_some() {
            ui.ctx().request_repaint_after(DEBOUNCE_DELAY);
        }

        action
    }

    fn normalized(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Record a keystroke: reschedule the debounce timer, or clear the
    /// session when the input was emptied.
    fn note_edit(&mut self, now: Instant) -> Option<SearchAction> {
        if self.normalized().is_empty() {
            self.pending_since = None;
            Some(SearchAction::Clear)
        } else {
            self.pending_since = Some(now);
            None
        }
    }

    /// Fire the pending search once the debounce window has elapsed.
    fn poll(&mut self, now: Instant) -> Option<SearchAction> {
        match self.pending_since {
            Some(since) if now.duration_since(since) >= DEBOUNCE_DELAY => self.commit_now(),
            _ => None,
        }
    }

    fn commit_now(&mut self) -> Option<SearchAction> {
        self.pending_since = None;
        let word = self.normalized();
        if word.is_empty() {
            None
        } else {
            Some(SearchAction::Commit(word))
        }
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_with(query: &str) -> SearchBar {
        SearchBar { query: query.to_string(), pending_since: None }
    }

    #[test]
    fn only_the_last_keystroke_in_a_burst_fires() {
        let mut bar = bar_with("h");
        let start = Instant::now();

        assert_eq!(bar.note_edit(start), None);
        bar.query.push('i');
        assert_eq!(bar.note_edit(start + Duration::from_millis(200)), None);

        // 500ms after the first keystroke, but only 300ms after the
        // second: still pending.
        assert_eq!(bar.poll(start + DEBOUNCE_DELAY), None);

        let fired = bar.poll(start + Duration::from_millis(200) + DEBOUNCE_DELAY);
        assert_eq!(fired, Some(SearchAction::Commit("hi".to_string())));

        // The timer is consumed; nothing fires twice.
        assert_eq!(bar.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn commit_normalizes_the_term() {
        let mut bar = bar_with("  Ice Cream ");
        assert_eq!(bar.commit_now(), Some(SearchAction::Commit("ice cream".to_string())));
    }

    #[test]
    fn emptying_the_input_clears_and_cancels_the_timer() {
        let mut bar = bar_with("cat");
        let start = Instant::now();
        bar.note_edit(start);

        bar.query.clear();
        assert_eq!(bar.note_edit(start + Duration::from_millis(100)), Some(SearchAction::Clear));
        assert_eq!(bar.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn whitespace_only_input_counts_as_empty() {
        let mut bar = bar_with("   ");
        assert_eq!(bar.note_edit(Instant::now()), Some(SearchAction::Clear));
        assert_eq!(bar.commit_now(), None);
    }

    #[test]
    fn explicit_submit_cancels_the_pending_debounce() {
        let mut bar = bar_with("dog");
        let start = Instant::now();
        bar.note_edit(start);

        assert_eq!(bar.commit_now(), Some(SearchAction::Commit("dog".to_string())));
        assert_eq!(bar.poll(start + Duration::from_secs(5)), None);
    }
}
