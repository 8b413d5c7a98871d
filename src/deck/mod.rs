pub mod builtin;

use std::{
    fs,
    path::Path,
};

use serde::Deserialize;

use crate::core::{
    SelectionKey,
    TwiError,
    VocabItem,
};

/// Deck files are either a bare array of items or an object with a title.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum DeckFile {
    Items(Vec<VocabItem>),
    Titled {
        title: String,
        items: Vec<VocabItem>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    title: String,
    items: Vec<VocabItem>,
}

impl Deck {
    pub fn new(title: impl Into<String>, items: Vec<VocabItem>) -> Self {
        Self { title: title.into(), items }
    }

    pub fn builtin() -> Self {
        Self::new("Twi Practice", builtin::HOME_WORDS.to_vec())
    }

    pub fn lesson() -> Self {
        Self::new("Lesson", builtin::LESSON_WORDS.to_vec())
    }

    pub fn load(path: &Path) -> Result<Self, TwiError> {
        let json = fs::read_to_string(path)?;
        let fallback_title = path
            .file_stem()
            .and_then(|name| name.to_str())
            .unwrap_or("Custom deck")
            .to_string();

        let deck = Self::from_json(&json, &fallback_title)?;
        tracing::info!(path = %path.display(), words = deck.len(), "Loaded deck");
        Ok(deck)
    }

    pub fn from_json(json: &str, fallback_title: &str) -> Result<Self, TwiError> {
        let (title, items) = match serde_json::from_str::<DeckFile>(json)? {
            DeckFile::Items(items) => (fallback_title.to_string(), items),
            DeckFile::Titled { title, items } => (title, items),
        };

        for (index, item) in items.iter().enumerate() {
            validate_item(index, item)?;
        }

        Ok(Self { title, items })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wraps `index` around the deck. `None` only when the deck is empty.
    pub fn get(&self, index: usize) -> Option<&VocabItem> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(index % self.items.len())
    }

    pub fn daily_item(&self, key: &SelectionKey) -> Option<&VocabItem> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(key.index_for(self.items.len()))
    }

    pub fn format_word_count(&self) -> String {
        match self.items.len() {
            1 => "1 word".to_string(),
            count => format!("{} words", count),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_item(index: usize, item: &VocabItem) -> Result<(), TwiError> {
    let missing = if item.term.trim().is_empty() {
        Some("term is empty")
    } else if item.translation.trim().is_empty() {
        Some("translation is empty")
    } else {
        None
    };

    match missing {
        Some(reason) => Err(TwiError::InvalidDeck { index, reason: reason.to_string() }),
        None => Ok(()),
    }
}
