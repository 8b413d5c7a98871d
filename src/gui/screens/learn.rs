use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::PracticeSession,
    deck::Deck,
    gui::{
        practice_card::{
            footer,
            practice_card,
            screen_title,
        },
        theme::Theme,
    },
};

const ROW_HEIGHT: f32 = 22.0;

pub fn show(ui: &mut egui::Ui, theme: &Theme, deck: &Deck, session: &mut PracticeSession) {
    screen_title(ui, theme, "Learn", Some("Small practice session. One word at a time."));

    practice_card(ui, theme, deck.items(), session);

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.weak(format!("{} · {}", deck.title(), deck.format_word_count()));
        if ui.small_button("Start over").clicked() {
            session.reset();
        }
    });

    ui.collapsing("All words", |ui| word_table(ui, theme, deck));

    footer(ui, theme, "Coming soon: audio playback, recording, and a review queue.");
}

fn word_table(ui: &mut egui::Ui, theme: &Theme, deck: &Deck) {
    if deck.is_empty() {
        ui.label(theme.muted(ui.ctx(), "No words in this deck."));
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "Twi"));
            });
            header.col(|ui| {
                ui.label(theme.heading(ui.ctx(), "English"));
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, deck.len(), |mut row| {
                let item = &deck.items()[row.index()];
                row.col(|ui| {
                    ui.strong(&*item.term);
                });
                row.col(|ui| {
                    ui.label(&*item.translation);
                });
            });
        });
}
