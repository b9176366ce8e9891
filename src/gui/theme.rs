use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// Palette pair registered for both egui variants at startup. Switching
/// the theme preference flips between them without re-registering.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Theme { dark: ThemeDetails::ink(), light: ThemeDetails::paper() }
    }
}

impl Theme {
    fn details(&self, dark_mode: bool) -> &ThemeDetails {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx.style().visuals.dark_mode).accent
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx.style().visuals.dark_mode).muted
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx.style().visuals.dark_mode).red
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.accent(ctx))
    }

    pub fn word_title(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx.style().visuals.dark_mode).title).strong()
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    background_dim: Color32,
    background_raised: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    accent: Color32,
    title: Color32,
    link: Color32,
    red: Color32,
}

impl ThemeDetails {
    fn ink() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 37),
            background_dim: Color32::from_rgb(18, 20, 29),
            background_raised: Color32::from_rgb(38, 41, 58),
            foreground: Color32::from_rgb(212, 214, 224),
            muted: Color32::from_rgb(130, 139, 170),
            selection: Color32::from_rgb(62, 66, 92),
            accent: Color32::from_rgb(170, 140, 250),
            title: Color32::from_rgb(255, 177, 100),
            link: Color32::from_rgb(110, 180, 240),
            red: Color32::from_rgb(245, 110, 110),
        }
    }

    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(246, 246, 250),
            background_dim: Color32::from_rgb(234, 234, 242),
            background_raised: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(42, 44, 52),
            muted: Color32::from_rgb(115, 122, 148),
            selection: Color32::from_rgb(202, 204, 228),
            accent: Color32::from_rgb(112, 82, 190),
            title: Color32::from_rgb(188, 108, 38),
            link: Color32::from_rgb(52, 122, 188),
            red: Color32::from_rgb(196, 72, 72),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, details: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: details.background,
                    weak_bg_fill: details.background_dim,
                    bg_stroke: Stroke {
                        color: details.background_dim,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: details.background_raised,
                    weak_bg_fill: details.background_raised,
                    bg_stroke: Stroke {
                        color: details.background_dim,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: details.selection,
                    weak_bg_fill: details.background_raised,
                    bg_stroke: Stroke { color: details.link, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: details.selection,
                    weak_bg_fill: details.background_raised,
                    bg_stroke: Stroke { color: details.link, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: details.background_dim,
                    weak_bg_fill: details.background_raised,
                    bg_stroke: Stroke { color: details.accent, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke {
                        color: details.foreground,
                        ..default.widgets.open.fg_stroke
                    },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: details.selection,
                stroke: Stroke { color: details.foreground, ..default.selection.stroke },
            },
            hyperlink_color: details.link,
            faint_bg_color: match is_dark {
                true => details.background_dim,
                false => details.background_raised,
            },
            extreme_bg_color: details.background_dim,
            code_bg_color: details.background_dim,
            error_fg_color: details.red,
            window_shadow: Shadow { color: details.background_dim, ..default.window_shadow },
            window_fill: details.background,
            window_stroke: Stroke { color: details.background_raised, ..default.window_stroke },
            panel_fill: details.background,
            popup_shadow: Shadow { color: details.background_dim, ..default.popup_shadow },
            ..default
        },
    );
}
