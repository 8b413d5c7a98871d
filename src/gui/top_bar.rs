use eframe::egui::{
    self,
    containers,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Learn,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Learn, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Learn => "Learn",
            Tab::Profile => "Profile",
        }
    }
}

pub enum TopBarAction {
    OpenDeck,
    UseBuiltinDeck,
    ToggleTheme,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        tab: &mut Tab,
        deck_title: &str,
        custom_deck: bool,
        dark_mode: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let theme_icon = if dark_mode { "☀" } else { "🌙" };
                if ui.button(theme_icon).on_hover_text("Switch light/dark").clicked() {
                    action = Some(TopBarAction::ToggleTheme);
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Open deck…").clicked() {
                        action = Some(TopBarAction::OpenDeck);
                    }
                    if ui.add_enabled(custom_deck, egui::Button::new("Use built-in deck")).clicked()
                    {
                        action = Some(TopBarAction::UseBuiltinDeck);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();
                for candidate in Tab::ALL {
                    ui.selectable_value(&mut *tab, candidate, candidate.label());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(deck_title).on_hover_text("Current deck");
                });
            });
        });

        action
    }
}
