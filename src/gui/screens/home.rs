use eframe::egui;

use crate::{
    core::{
        PracticeSession,
        SelectionKey,
    },
    deck::Deck,
    gui::{
        practice_card::{
            card_frame,
            footer,
            practice_card,
            screen_title,
        },
        theme::Theme,
    },
};

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    deck: &Deck,
    session: &mut PracticeSession,
    today: SelectionKey,
) {
    screen_title(ui, theme, "Twi Practice", Some("demo: vocabulary + example reveal."));

    word_of_the_day(ui, theme, deck, today);
    ui.add_space(12.0);

    practice_card(ui, theme, deck.items(), session);

    footer(
        ui,
        theme,
        "Next step: add a \"Hear\" and \"Speak\" button that says the pronunciation and records audio, and a repetition review list.",
    );
}

fn word_of_the_day(ui: &mut egui::Ui, theme: &Theme, deck: &Deck, today: SelectionKey) {
    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(theme.heading(ui.ctx(), "Word of the day"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(today.to_string());
            });
        });

        match deck.daily_item(&today) {
            Some(item) => {
                ui.label(egui::RichText::new(&*item.term).size(24.0).strong());
                ui.label(
                    egui::RichText::new(&*item.translation).color(theme.accent(ui.ctx())),
                );
            }
            None => {
                ui.label(theme.muted(ui.ctx(), "No words in this deck."));
            }
        }
    });
}
