use eframe::egui;

use crate::core::TwiError;

#[derive(Clone)]
struct ErrorData {
    title: String,
    message: String,
    details: Option<String>,
}

#[derive(Default)]
pub struct ErrorModal {
    data: Option<ErrorData>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        error: &TwiError,
    ) {
        self.data = Some(ErrorData {
            title: title.into(),
            message: message.into(),
            details: Some(error.to_string()),
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(data) = &self.data else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&data.title).size(18.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&data.message);

            if let Some(details) = &data.details {
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(3)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.data = None;
        }
    }
}
