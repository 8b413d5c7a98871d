use crate::core::VocabItem;

pub static HOME_WORDS: [VocabItem; 3] = [
    VocabItem::new_static("Akwaaba", "Welcome", "Akwaaba, me nua.", "Welcome, my friend."),
    VocabItem::new_static(
        "Medaase",
        "Thank you",
        "Medaase sɛ wo boa me.",
        "Thank you for helping me.",
    ),
    VocabItem::new_static(
        "Ɛte sɛn?",
        "How are you?",
        "Ɛte sɛn? Wo ho te dɛn?",
        "How are you? How is your body?",
    ),
];

// Same words as the home screen for now; lessons will diverge once there is content for them.
pub static LESSON_WORDS: [VocabItem; 3] = [
    VocabItem::new_static("Akwaaba", "Welcome", "Akwaaba, me nua.", "Welcome, my friend."),
    VocabItem::new_static(
        "Medaase",
        "Thank you",
        "Medaase sɛ wo boa me.",
        "Thank you for helping me.",
    ),
    VocabItem::new_static(
        "Ɛte sɛn?",
        "How are you?",
        "Ɛte sɛn? Wo ho te dɛn?",
        "How are you? How is your body?",
    ),
];
