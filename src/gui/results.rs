use eframe::egui;

use super::theme::Theme;
use crate::core::{
    grouping::{
        group_entries,
        DefinitionCard,
        DefinitionGroup,
        VisibilityState,
    },
    session::SearchState,
};

const HIGHLIGHTED_POS: [&str; 3] = ["noun", "adjective", "verb"];

#[derive(Debug, Clone)]
pub enum ResultsAction {
    ToggleGroup(String),
    PlayAudio(String),
}

/// Draw the results area for the current search state. The grouped view
/// is rebuilt from the entry list on every frame; the only state that
/// survives re-render is the visibility flags owned by the session.
pub fn show(ui: &mut egui::Ui, state: &SearchState, theme: &Theme) -> Option<ResultsAction> {
    match state {
        SearchState::Idle => None,

        SearchState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.add(egui::Spinner::new().size(28.0));
            });
            None
        }

        SearchState::Error(message) => {
            ui.add_space(12.0);
            ui.label(egui::RichText::new(message).color(theme.error(ui.ctx())));
            None
        }

        SearchState::Rendered(view) => {
            let grouped = group_entries(&view.entries);
            let mut action = None;

            egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                for group in grouped.groups() {
                    if let Some(a) = show_group(ui, group, &view.visibility, theme) {
                        action = Some(a);
                    }
                    ui.add_space(10.0);
                }
            });

            action
        }
    }
}

fn show_group(
    ui: &mut egui::Ui,
    group: &DefinitionGroup,
    visibility: &VisibilityState,
    theme: &Theme,
) -> Option<ResultsAction> {
    let mut action = None;

    let heading = egui::RichText::new(&group.part_of_speech).size(18.0).strong();
    let heading = if HIGHLIGHTED_POS.contains(&group.part_of_speech.to_lowercase().as_str()) {
        heading.color(theme.accent(ui.ctx()))
    } else {
        heading
    };
    ui.label(heading);
    ui.add_space(4.0);

    for card in group.visible(visibility) {
        if let Some(a) = show_card(ui, card, theme) {
            action = Some(a);
        }
    }

    if group.has_overflow() {
        let label = if visibility.is_expanded(&group.part_of_speech) {
            "Show Less".to_string()
        } else {
            format!("Show More ({})", group.hidden_count())
        };

        if ui.button(label).clicked() {
            action = Some(ResultsAction::ToggleGroup(group.part_of_speech.clone()));
        }
    }

    action
}

fn show_card(ui: &mut egui::Ui, card: &DefinitionCard, theme: &Theme) -> Option<ResultsAction> {
    let mut action = None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(theme.word_title(ui.ctx(), &card.word));
            ui.label(
                egui::RichText::new(format!("({})", card.part_of_speech))
                    .color(theme.muted(ui.ctx())),
            );

            if let Some(phonetic) = &card.phonetic {
                ui.label(egui::RichText::new(phonetic).color(theme.muted(ui.ctx())).italics());
            }

            if let Some(audio) = &card.audio {
                if ui.small_button("🔊").on_hover_text("Play pronunciation").clicked() {
                    action = Some(ResultsAction::PlayAudio(audio.clone()));
                }
            }
        });

        ui.label(&card.definition);

        if let Some(example) = &card.example {
            ui.label(
                egui::RichText::new(format!("Example: {}", example))
                    .color(theme.muted(ui.ctx()))
                    .italics(),
            );
        }

        if !card.synonyms.is_empty() {
            ui.label(
                egui::RichText::new(format!("Synonyms: {}", card.synonyms.join(", ")))
                    .color(theme.muted(ui.ctx())),
            );
        }
    });

    action
}
