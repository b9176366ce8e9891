use std::collections::VecDeque;

use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;

const MAX_ENTRIES: usize = 25;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: String,
    pub looked_up: chrono::DateTime<chrono::Utc>,
    pub entry_count: usize,
}

impl HistoryEntry {
    fn new(word: String, entry_count: usize) -> Self {
        Self { word, looked_up: chrono::Utc::now(), entry_count }
    }

    pub fn format_looked_up(&self) -> String {
        self.looked_up.with_timezone(&chrono::Local).format("%H:%M:%S").to_string()
    }
}

/// Successful lookups, most recent first. In-memory only; gone on exit.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: VecDeque<HistoryEntry>,
}

impl SearchHistory {
    pub fn add(&mut self, word: &str, entry_count: usize) {
        self.entries.retain(|entry| entry.word != word);
        self.entries.push_front(HistoryEntry::new(word.to_string(), entry_count));

        while self.entries.len() > MAX_ENTRIES {
            self.entries.pop_back();
        }
    }

    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn show_window(
    ctx: &egui::Context,
    open: &mut bool,
    history: &SearchHistory,
    theme: &Theme,
) {
    egui::Window::new("Search History")
        .open(open)
        .resizable(true)
        .default_size([320.0, 280.0])
        .show(ctx, |ui| {
            if history.is_empty() {
                ui.label("No history available.");
                return;
            }

            let text_height = egui::TextStyle::Body
                .resolve(ui.style())
                .size
                .max(ui.spacing().interact_size.y);

            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder())
                .header(25.0, |mut header| {
                    header.col(|ui| {
                        ui.label(theme.heading(ui.ctx(), "Word"));
                    });
                    header.col(|ui| {
                        ui.label(theme.heading(ui.ctx(), "When"));
                    });
                    header.col(|ui| {
                        ui.label(theme.heading(ui.ctx(), "Entries"));
                    });
                })
                .body(|mut body| {
                    body.rows(text_height, history.len(), |mut row| {
                        let entry = &history.entries()[row.index()];
                        row.col(|ui| {
                            ui.strong(&entry.word);
                        });
                        row.col(|ui| {
                            ui.label(entry.format_looked_up());
                        });
                        row.col(|ui| {
                            ui.label(entry.entry_count.to_string());
                        });
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_words_are_deduplicated_and_moved_to_front() {
        let mut history = SearchHistory::default();
        history.add("cat", 1);
        history.add("dog", 2);
        history.add("cat", 3);

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].word, "cat");
        assert_eq!(history.entries()[0].entry_count, 3);
        assert_eq!(history.entries()[1].word, "dog");
    }

    #[test]
    fn history_is_capped() {
        let mut history = SearchHistory::default();
        for i in 0..(MAX_ENTRIES + 10) {
            history.add(&format!("word{}", i), 1);
        }

        assert_eq!(history.len(), MAX_ENTRIES);
        // The oldest entries fell off the back.
        assert_eq!(history.entries()[0].word, format!("word{}", MAX_ENTRIES + 9));
        assert!(history.entries().iter().all(|e| e.word != "word0"));
    }
}
