use eframe::egui;

use crate::{
    core::ProgressState,
    gui::{
        practice_card::{
            card_frame,
            screen_title,
        },
        theme::Theme,
    },
};

pub fn show(ui: &mut egui::Ui, theme: &Theme, progress: &ProgressState) {
    screen_title(ui, theme, "Profile", None);

    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(theme.heading(ui.ctx(), "This week"));
        ui.add(egui::ProgressBar::new(progress.week_fraction()).text(format!(
            "{}/{} days",
            progress.days_this_week(),
            ProgressState::DAYS_PER_WEEK
        )));

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🔥").size(20.0));
            ui.label(egui::RichText::new(format!("Streak: {}", progress.format_streak())).size(16.0));
        });
    });

    ui.add_space(8.0);
    ui.label(theme.muted(ui.ctx(), "Coming soon."));
}
