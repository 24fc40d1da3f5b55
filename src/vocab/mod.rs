use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        Difficulty,
        RecommendedWord,
        Result,
        UpsertOutcome,
        UserId,
        WordMatchError,
    },
    matching::assembler::enrich_entries,
    store::{
        DictionaryStore,
        UserStore,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedWord {
    pub word: String,
    pub difficulty: Difficulty,
    pub outcome: UpsertOutcome,
}

/// A user's own word list: rating words and reading them back.
pub struct VocabularyService {
    users: Arc<dyn UserStore>,
    dictionary: Arc<dyn DictionaryStore>,
    recent_limit: usize,
}

impl VocabularyService {
    pub fn new(
        users: Arc<dyn UserStore>,
        dictionary: Arc<dyn DictionaryStore>,
        recent_limit: usize,
    ) -> Self {
        Self { users, dictionary, recent_limit }
    }

    /// Records a rating for a dictionary word, replacing any earlier rating.
    pub fn rate_word(&self, user_id: &UserId, word: &str, difficulty: &str) -> Result<RatedWord> {
        let difficulty: Difficulty = difficulty.parse()?;
        let word = word.to_lowercase();
        let word_ref =
            self.dictionary.lookup(&word).ok_or_else(|| WordMatchError::UnknownWord(word.clone()))?;

        let outcome = self.users.upsert_entry(user_id, word_ref, difficulty)?;
        match outcome {
            UpsertOutcome::Inserted => log::debug!("{} rated '{}' as {}", user_id, word, difficulty),
            UpsertOutcome::Updated { previous } => {
                log::debug!("{} re-rated '{}' from {} to {}", user_id, word, previous, difficulty)
            }
        }

        Ok(RatedWord { word, difficulty, outcome })
    }

    pub fn all_words(&self, user_id: &UserId) -> Result<Vec<RecommendedWord>> {
        let list = self.users.load_word_list(user_id)?;
        enrich_entries(self.dictionary.as_ref(), &list.entries)
    }

    /// Most recently added ratings, newest first. Re-rating does not move a word.
    pub fn recent_words(&self, user_id: &UserId) -> Result<Vec<RecommendedWord>> {
        let list = self.users.load_word_list(user_id)?;
        enrich_entries(self.dictionary.as_ref(), list.entries.iter().rev().take(self.recent_limit))
    }
}
