use super::VocabItem;

/// Cursor and reveal flag behind a practice card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSession {
    index: usize,
    show_example: bool,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_example(&self) -> bool {
        self.show_example
    }

    pub fn current<'a>(&self, items: &'a [VocabItem]) -> Option<&'a VocabItem> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index % items.len())
    }

    pub fn toggle_example(&mut self) {
        self.show_example = !self.show_example;
    }

    /// Hides the example and moves to the following word, wrapping at `len`.
    pub fn next(&mut self, len: usize) {
        self.show_example = false;
        self.index = if len == 0 { 0 } else { (self.index % len + 1) % len };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn reveal_label(&self) -> &'static str {
        if self.show_example { "Hide example" } else { "Reveal example" }
    }
}
