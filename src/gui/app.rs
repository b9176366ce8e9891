use eframe::egui;

use super::{
    error_modal::ErrorModal,
    history::{
        self,
        SearchHistory,
    },
    results::{
        self,
        ResultsAction,
    },
    search_bar::{
        SearchAction,
        SearchBar,
    },
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        session::SearchController,
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct WordlensApp {
    // Search session
    controller: SearchController,
    search_bar: SearchBar,
    history: SearchHistory,

    // Configuration
    settings_data: SettingsData,

    // UI state
    theme: Theme,
    history_open: bool,
    ip_display: Option<String>,
    error_modal: ErrorModal,

    task_manager: TaskManager,
}

impl WordlensApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>("settings.json");
        let theme = Theme::default();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            controller: SearchController::default(),
            search_bar: SearchBar::new(),
            history: SearchHistory::default(),
            settings_data,
            theme,
            history_open: false,
            ip_display: None,
            error_modal: ErrorModal::new(),
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Lookup { seq, word, result } => {
                let entry_count = result.as_ref().map(|entries| entries.len()).unwrap_or(0);
                let succeeded = result.is_ok();

                if self.controller.resolve(seq, result) {
                    if succeeded {
                        self.history.add(&word, entry_count);
                    }
                } else {
                    println!("[Lookup] Discarding stale response for \"{}\"", word);
                }
            }

            TaskResult::IpAddress(result) => {
                self.ip_display = Some(match result {
                    Ok(ip) => format!("Your IP: {}", ip),
                    Err(e) => {
                        eprintln!("[Ip] Lookup failed: {}", e);
                        "Unable to retrieve IP.".to_string()
                    }
                });
            }

            TaskResult::AudioPlayed(result) => {
                if let Err(e) = result {
                    self.error_modal.show_error(
                        "Audio Error",
                        "Unable to play pronunciation audio",
                        Some(&e),
                    );
                }
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings_data.dark_mode = !self.settings_data.dark_mode;
        ctx.set_theme(if self.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("[Settings] Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for WordlensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) =
            TopBar::show(ctx, self.settings_data.dark_mode, self.ip_display.as_deref())
        {
            match action {
                TopBarAction::ToggleTheme => self.toggle_theme(ctx),
                TopBarAction::ToggleHistory => self.history_open = !self.history_open,
                TopBarAction::RevealIp => self.task_manager.fetch_ip(),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.search_bar.show(ui) {
                match action {
                    SearchAction::Commit(word) => {
                        let seq = self.controller.begin();
                        self.task_manager.lookup(word, seq);
                    }
                    SearchAction::Clear => self.controller.clear(),
                }
            }

            ui.separator();

            if let Some(action) = results::show(ui, self.controller.state(), &self.theme) {
                match action {
                    ResultsAction::ToggleGroup(part_of_speech) => {
                        self.controller.toggle(&part_of_speech);
                    }
                    ResultsAction::PlayAudio(url) => self.task_manager.play_pronunciation(url),
                }
            }
        });

        history::show_window(ctx, &mut self.history_open, &self.history, &self.theme);
        self.error_modal.show(ctx);
    }
}
