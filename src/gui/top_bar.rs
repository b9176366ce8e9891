use eframe::egui;

pub enum TopBarAction {
    ToggleTheme,
    RevealIp,
    ToggleHistory,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        dark_mode: bool,
        ip_display: Option<&str>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Wordlens");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_glyph = if dark_mode { "☀" } else { "🌙" };
                    if ui.button(theme_glyph).on_hover_text("Toggle theme").clicked() {
                        action = Some(TopBarAction::ToggleTheme);
                    }

                    if ui.button("History").clicked() {
                        action = Some(TopBarAction::ToggleHistory);
                    }

                    if ui.button("Reveal IP").clicked() {
                        action = Some(TopBarAction::RevealIp);
                    }

                    if let Some(ip) = ip_display {
                        ui.small(ip);
                    }
                });
            });
        });

        action
    }
}
