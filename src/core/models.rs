use std::borrow::Cow;

use serde::{
    Deserialize,
    Serialize,
};

use super::TwiError;

/// A single flashcard. Built-in items borrow `'static` strings, items read from a
/// deck file own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub term: Cow<'static, str>,                // Twi word or phrase
    pub translation: Cow<'static, str>,         // English meaning
    pub example_source: Cow<'static, str>,      // Example sentence in Twi
    pub example_translation: Cow<'static, str>, // Example sentence in English
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Cow<'static, str>>,
}

impl VocabItem {
    pub const fn new_static(
        term: &'static str,
        translation: &'static str,
        example_source: &'static str,
        example_translation: &'static str,
    ) -> Self {
        VocabItem {
            term: Cow::Borrowed(term),
            translation: Cow::Borrowed(translation),
            example_source: Cow::Borrowed(example_source),
            example_translation: Cow::Borrowed(example_translation),
            definition: None,
        }
    }

    pub fn has_example(&self) -> bool {
        !self.example_source.trim().is_empty() || !self.example_translation.trim().is_empty()
    }
}

/// Placeholder weekly progress. Not derived from real usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    days_this_week: u32,
    streak_days: u32,
}

impl ProgressState {
    pub const DAYS_PER_WEEK: u32 = 7;

    pub fn new(days_this_week: u32, streak_days: u32) -> Result<Self, TwiError> {
        if days_this_week > Self::DAYS_PER_WEEK {
            return Err(TwiError::InvalidProgress(days_this_week));
        }
        Ok(Self { days_this_week, streak_days })
    }

    pub const fn demo() -> Self {
        Self { days_this_week: 3, streak_days: 5 }
    }

    pub fn days_this_week(&self) -> u32 {
        self.days_this_week
    }

    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    pub fn week_fraction(&self) -> f32 {
        self.days_this_week as f32 / Self::DAYS_PER_WEEK as f32
    }

    pub fn format_streak(&self) -> String {
        match self.streak_days {
            1 => "1 day".to_string(),
            n => format!("{} days", n),
        }
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_validation() {
        assert!(ProgressState::new(0, 0).is_ok());
        assert!(ProgressState::new(7, 120).is_ok());

        let err = ProgressState::new(8, 1).unwrap_err();
        assert!(matches!(err, TwiError::InvalidProgress(8)));
    }

    #[test]
    fn test_progress_fraction_and_streak() {
        let full = ProgressState::new(7, 1).unwrap();
        assert_eq!(full.week_fraction(), 1.0);
        assert_eq!(full.format_streak(), "1 day");

        let demo = ProgressState::demo();
        assert!(demo.week_fraction() > 0.0 && demo.week_fraction() < 1.0);
        assert_eq!(demo.format_streak(), "5 days");
        assert_eq!(ProgressState::default(), demo);
    }

    #[test]
    fn test_vocab_item_json_without_definition() {
        let json = r#"{
            "term": "Akwaaba",
            "translation": "Welcome",
            "example_source": "Akwaaba, me nua.",
            "example_translation": "Welcome, my friend."
        }"#;
        let item: VocabItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.term, "Akwaaba");
        assert!(item.definition.is_none());
        assert!(item.has_example());

        let written = serde_json::to_string(&item).unwrap();
        assert!(!written.contains("definition"));
    }
}
