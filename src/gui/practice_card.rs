use eframe::egui;

use super::theme::Theme;
use crate::core::{
    PracticeSession,
    VocabItem,
};

const EMPTY_DECK: &str = "No words in this deck.";
const BUTTON_HEIGHT: f32 = 36.0;

pub fn card_frame(ui: &egui::Ui, theme: &Theme) -> egui::Frame {
    egui::Frame::group(ui.style())
        .stroke(theme.card_stroke(ui.ctx()))
        .corner_radius(16.0)
        .inner_margin(16.0)
}

/// Term card with the reveal/next controls. Taps mutate `session` only.
pub fn practice_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    items: &[VocabItem],
    session: &mut PracticeSession,
) {
    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(ui.available_width());

        let Some(item) = session.current(items) else {
            ui.label(theme.muted(ui.ctx(), EMPTY_DECK));
            return;
        };

        ui.label(theme.heading(ui.ctx(), "Word"));
        ui.label(theme.term(ui.ctx(), &item.term));
        ui.label(egui::RichText::new(format!("English: {}", item.translation)).size(16.0));

        if let Some(definition) = &item.definition {
            ui.label(theme.muted(ui.ctx(), definition));
        }

        if session.show_example() {
            ui.add_space(8.0);
            ui.separator();
            ui.label(theme.heading(ui.ctx(), "Example"));
            if item.has_example() {
                ui.label(egui::RichText::new(&*item.example_source).size(16.0));
                ui.label(egui::RichText::new(&*item.example_translation).size(16.0));
            } else {
                ui.label(theme.muted(ui.ctx(), "No example for this word yet."));
            }
        }

        ui.add_space(10.0);

        let mut toggle = false;
        let mut next = false;
        ui.columns(2, |columns| {
            let size = [columns[0].available_width(), BUTTON_HEIGHT];
            toggle = columns[0].add_sized(size, egui::Button::new(session.reveal_label())).clicked();
            next = columns[1].add_sized(size, egui::Button::new("Next")).clicked();
        });

        if toggle {
            session.toggle_example();
        }
        if next {
            session.next(items.len());
        }
    });
}

pub fn footer(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.add_space(6.0);
    ui.label(theme.muted(ui.ctx(), text));
}

pub fn screen_title(ui: &mut egui::Ui, theme: &Theme, title: &str, subtitle: Option<&str>) {
    ui.label(theme.heading(ui.ctx(), title).size(28.0).strong());
    if let Some(subtitle) = subtitle {
        ui.label(theme.muted(ui.ctx(), subtitle));
    }
    ui.add_space(8.0);
}
