//! Cross-user word-proficiency matching.
//!
//! Finds the user whose difficulty ratings overlap most with a target user's
//! at one difficulty level and recommends that user's words at that level.

pub mod core;
pub mod matching;
pub mod persistence;
pub mod settings;
pub mod store;
pub mod vocab;

pub use crate::core::{
    Difficulty,
    RecommendedWord,
    Result,
    UserId,
    WordMatchError,
    WordRef,
};
pub use matching::MatchingService;
pub use settings::MatcherSettings;
pub use store::{
    DictionaryStore,
    InMemoryDictionary,
    InMemoryUserStore,
    UserStore,
};
pub use vocab::VocabularyService;
