use std::path::{
    Path,
    PathBuf,
};

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    screens,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        Tab,
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        PracticeSession,
        ProgressState,
        SelectionKey,
        TwiError,
    },
    deck::Deck,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const MAX_CONTENT_WIDTH: f32 = 520.0;

/// Home and Learn decks for the given setting. A custom deck backs both screens.
pub fn load_decks(deck_path: Option<&Path>) -> Result<(Deck, Deck), TwiError> {
    match deck_path {
        Some(path) => {
            let deck = Deck::load(path)?;
            Ok((deck.clone(), deck))
        }
        None => Ok((Deck::builtin(), Deck::lesson())),
    }
}

/// Result of switching decks. On failure the built-in decks come back with no path.
pub struct DeckSelection {
    pub home_deck: Deck,
    pub lesson_deck: Deck,
    pub deck_path: Option<PathBuf>,
    pub error: Option<TwiError>,
}

pub fn load_decks_or_builtin(deck_path: Option<&Path>) -> DeckSelection {
    match load_decks(deck_path) {
        Ok((home_deck, lesson_deck)) => DeckSelection {
            home_deck,
            lesson_deck,
            deck_path: deck_path.map(Path::to_path_buf),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Failed to load deck {:?}: {}", deck_path, e);
            DeckSelection {
                home_deck: Deck::builtin(),
                lesson_deck: Deck::lesson(),
                deck_path: None,
                error: Some(e),
            }
        }
    }
}

pub struct TwiApp {
    // Configuration
    pub settings_data: SettingsData,

    // Data
    pub home_deck: Deck,
    pub lesson_deck: Deck,
    pub progress: ProgressState,

    // UI State
    pub tab: Tab,
    pub home_session: PracticeSession,
    pub lesson_session: PracticeSession,
    pub theme: Theme,
    pub error: ErrorModal,
}

impl TwiApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let mut app = Self {
            // Configuration
            settings_data,

            // Data
            home_deck: Deck::builtin(),
            lesson_deck: Deck::lesson(),
            progress: ProgressState::demo(),

            // UI State
            tab: Tab::default(),
            home_session: PracticeSession::new(),
            lesson_session: PracticeSession::new(),
            theme: Theme::kente(),
            error: ErrorModal::new(),
        };

        if let Some(path) = app.settings_data.deck_path.clone() {
            if !app.switch_deck(Some(path.as_path())) {
                app.save_settings();
            }
        }

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(app.settings_data.effective_zoom());
        app.apply_dark_mode(&cc.egui_ctx);

        app
    }

    fn apply_dark_mode(&self, ctx: &egui::Context) {
        let dark_mode = self.settings_data.dark_mode;
        ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
    }

    /// Falls back to the built-in words when the deck cannot be read. Returns false on fallback.
    fn switch_deck(&mut self, deck_path: Option<&Path>) -> bool {
        let selection = load_decks_or_builtin(deck_path);

        self.home_deck = selection.home_deck;
        self.lesson_deck = selection.lesson_deck;
        self.settings_data.deck_path = selection.deck_path;
        self.home_session.reset();
        self.lesson_session.reset();

        match selection.error {
            Some(e) => {
                self.error.show_error(
                    "Deck Error",
                    "Unable to load the deck. Using the built-in words instead.",
                    &e,
                );
                false
            }
            None => true,
        }
    }

    fn handle_top_bar_action(&mut self, action: TopBarAction, ctx: &egui::Context) {
        match action {
            TopBarAction::OpenDeck => {
                if let Some(path) =
                    rfd::FileDialog::new().add_filter("Deck (JSON)", &["json"]).pick_file()
                {
                    self.switch_deck(Some(path.as_path()));
                    self.save_settings();
                }
            }
            TopBarAction::UseBuiltinDeck => {
                self.switch_deck(None);
                self.save_settings();
            }
            TopBarAction::ToggleTheme => {
                self.settings_data.dark_mode = !self.settings_data.dark_mode;
                self.apply_dark_mode(ctx);
                self.save_settings();
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for TwiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(
            ctx,
            &mut self.tab,
            self.home_deck.title(),
            self.settings_data.deck_path.is_some(),
            self.settings_data.dark_mode,
        ) {
            self.handle_top_bar_action(action, ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(MAX_CONTENT_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        match self.tab {
                            Tab::Home => screens::home::show(
                                ui,
                                &self.theme,
                                &self.home_deck,
                                &mut self.home_session,
                                SelectionKey::today(),
                            ),
                            Tab::Learn => screens::learn::show(
                                ui,
                                &self.theme,
                                &self.lesson_deck,
                                &mut self.lesson_session,
                            ),
                            Tab::Profile => {
                                screens::profile::show(ui, &self.theme, &self.progress)
                            }
                        }
                    });
                });
            });
        });

        self.error.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_decks_without_path() {
        let (home, lesson) = load_decks(None).unwrap();
        assert_eq!(home, Deck::builtin());
        assert_eq!(lesson, Deck::lesson());
    }

    #[test]
    fn test_custom_deck_backs_both_screens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.json");
        std::fs::write(
            &path,
            r#"{ "title": "Market", "items": [
                { "term": "Sika", "translation": "Money", "example_source": "", "example_translation": "" }
            ] }"#,
        )
        .unwrap();

        let (home, lesson) = load_decks(Some(path.as_path())).unwrap();
        assert_eq!(home.title(), "Market");
        assert_eq!(home, lesson);
    }

    #[test]
    fn test_missing_deck_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_decks(Some(dir.path().join("absent.json").as_path()));
        assert!(matches!(result, Err(TwiError::Io(_))));
    }

    #[test]
    fn test_unreadable_deck_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "[ { \"term\": ").unwrap();

        let selection = load_decks_or_builtin(Some(corrupt.as_path()));
        assert_eq!(selection.home_deck, Deck::builtin());
        assert_eq!(selection.lesson_deck, Deck::lesson());
        assert!(selection.deck_path.is_none());
        assert!(matches!(selection.error, Some(TwiError::Json(_))));
    }

    #[test]
    fn test_invalid_deck_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let invalid = dir.path().join("blank.json");
        std::fs::write(
            &invalid,
            r#"[ { "term": "Sika", "translation": "", "example_source": "", "example_translation": "" } ]"#,
        )
        .unwrap();

        let selection = load_decks_or_builtin(Some(invalid.as_path()));
        assert_eq!(selection.home_deck, Deck::builtin());
        assert_eq!(selection.lesson_deck, Deck::lesson());
        assert!(selection.deck_path.is_none());
        assert!(matches!(selection.error, Some(TwiError::InvalidDeck { index: 0, .. })));
    }

    #[test]
    fn test_valid_deck_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greetings.json");
        std::fs::write(
            &path,
            r#"[ { "term": "Akwaaba", "translation": "Welcome", "example_source": "", "example_translation": "" } ]"#,
        )
        .unwrap();

        let selection = load_decks_or_builtin(Some(path.as_path()));
        assert!(selection.error.is_none());
        assert_eq!(selection.deck_path.as_deref(), Some(path.as_path()));
        assert_eq!(selection.home_deck.title(), "greetings");

        let builtin = load_decks_or_builtin(None);
        assert!(builtin.error.is_none() && builtin.deck_path.is_none());
    }
}
