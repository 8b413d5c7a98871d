use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::kente()
    }
}

impl Theme {
    pub fn kente() -> Self {
        Theme { dark: ThemeDetails::kente_night(), light: ThemeDetails::kente_day() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode { &self.dark } else { &self.light }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).gold)
    }

    pub fn term(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(34.0).strong().color(self.details(ctx).foreground)
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).muted)
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn card_stroke(&self, ctx: &egui::Context) -> Stroke {
        Stroke::new(1.0, self.details(ctx).border)
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    panel: Color32,
    raised: Color32,
    foreground: Color32,
    muted: Color32,
    border: Color32,
    gold: Color32,
    green: Color32,
    red: Color32,
}

impl ThemeDetails {
    fn kente_night() -> Self {
        Self {
            background: Color32::from_rgb(24, 22, 20),
            panel: Color32::from_rgb(32, 29, 26),
            raised: Color32::from_rgb(48, 44, 39),
            foreground: Color32::from_rgb(242, 236, 226),
            muted: Color32::from_rgb(170, 160, 148),
            border: Color32::from_rgba_unmultiplied(127, 127, 127, 64),
            gold: Color32::from_rgb(242, 183, 5),
            green: Color32::from_rgb(46, 160, 67),
            red: Color32::from_rgb(206, 65, 55),
        }
    }

    fn kente_day() -> Self {
        Self {
            background: Color32::from_rgb(252, 249, 243),
            panel: Color32::from_rgb(246, 241, 231),
            raised: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(36, 32, 28),
            muted: Color32::from_rgb(110, 100, 90),
            border: Color32::from_rgba_unmultiplied(127, 127, 127, 64),
            gold: Color32::from_rgb(176, 122, 0),
            green: Color32::from_rgb(30, 120, 50),
            red: Color32::from_rgb(180, 50, 40),
        }
    }
}

/// Registers both variants; `ctx.set_theme` picks between them.
pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.border,
                ),
                inactive: widget(default.widgets.inactive, theme.raised, theme.border),
                hovered: widget(default.widgets.hovered, theme.raised, theme.gold),
                active: widget(default.widgets.active, theme.raised, theme.green),
                open: widget(default.widgets.open, theme.panel, theme.gold),
            },
            selection: Selection {
                bg_fill: theme.green.linear_multiply(0.6),
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.gold,
            faint_bg_color: theme.panel,
            extreme_bg_color: theme.background,
            error_fg_color: theme.red,
            warn_fg_color: theme.gold,
            window_shadow: Shadow { color: theme.background, ..default.window_shadow },
            window_fill: theme.panel,
            window_stroke: Stroke { color: theme.border, ..default.window_stroke },
            panel_fill: theme.background,
            ..default
        },
    );
}
