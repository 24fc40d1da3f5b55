pub mod dictionary;
pub mod memory;

pub use dictionary::InMemoryDictionary;
pub use memory::InMemoryUserStore;

use crate::core::{
    Difficulty,
    DictionaryWord,
    PopulationSnapshot,
    Result,
    UpsertOutcome,
    UserId,
    UserWordList,
    WordRef,
};

/// Read/write access to users' rated word lists.
pub trait UserStore: Send + Sync {
    /// Every user's list, in a stable order that is reused for tie-breaking.
    fn load_all_word_lists(&self) -> Result<PopulationSnapshot>;

    fn load_word_list(&self, user_id: &UserId) -> Result<UserWordList>;

    fn upsert_entry(
        &self,
        user_id: &UserId,
        word: WordRef,
        difficulty: Difficulty,
    ) -> Result<UpsertOutcome>;
}

/// Canonical words and their definitions.
pub trait DictionaryStore: Send + Sync {
    fn resolve(&self, word: &WordRef) -> Result<DictionaryWord>;

    /// Case-insensitive lookup by word text.
    fn lookup(&self, text: &str) -> Option<WordRef>;
}
