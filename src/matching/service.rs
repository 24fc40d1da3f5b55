use std::{
    sync::Arc,
    time::Instant,
};

use super::{
    aggregator::{
        aggregate,
        AggregateOptions,
    },
    assembler::assemble,
    selector::select_match,
};
use crate::{
    core::{
        MatchResult,
        RecommendedWord,
        Result,
        UserId,
    },
    settings::MatcherSettings,
    store::{
        DictionaryStore,
        UserStore,
    },
};

pub struct MatchingService {
    users: Arc<dyn UserStore>,
    dictionary: Arc<dyn DictionaryStore>,
    settings: MatcherSettings,
}

impl MatchingService {
    pub fn new(
        users: Arc<dyn UserStore>,
        dictionary: Arc<dyn DictionaryStore>,
        settings: MatcherSettings,
    ) -> Self {
        Self { users, dictionary, settings }
    }

    pub fn settings(&self) -> &MatcherSettings {
        &self.settings
    }

    /// Aggregates and selects against a fresh snapshot, without assembling.
    pub fn best_match(&self, target_user: &UserId) -> Result<MatchResult> {
        let target = self.users.load_word_list(target_user)?;
        let population = self.users.load_all_word_lists()?;

        let counts = aggregate(
            &target,
            &population,
            AggregateOptions {
                exclude_self: self.settings.exclude_self,
                parallel: self.settings.parallel,
            },
        );
        select_match(&counts, self.settings.threshold)
    }

    /// Words of the most similar user in the bucket where the overlap is strongest.
    pub fn find_similar_words(&self, target_user: &UserId) -> Result<Vec<RecommendedWord>> {
        let start = Instant::now();
        let result = self.best_match(target_user)?;
        let words = assemble(self.users.as_ref(), self.dictionary.as_ref(), &result)?;

        log::info!(
            "Recommended {} {} words from {} to {} ({:.2}ms)",
            words.len(),
            result.difficulty,
            result.user_id,
            target_user,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            Difficulty,
            PopulationSnapshot,
            UpsertOutcome,
            UserWordList,
            WordMatchError,
            WordRef,
        },
        store::InMemoryDictionary,
    };

    struct OfflineUserStore;

    impl OfflineUserStore {
        fn offline<T>() -> Result<T> {
            Err(WordMatchError::StoreUnavailable("user database offline".to_string()))
        }
    }

    impl UserStore for OfflineUserStore {
        fn load_all_word_lists(&self) -> Result<PopulationSnapshot> {
            Self::offline()
        }

        fn load_word_list(&self, _user_id: &UserId) -> Result<UserWordList> {
            Self::offline()
        }

        fn upsert_entry(&self, _user_id: &UserId, _word: WordRef, _difficulty: Difficulty) -> Result<UpsertOutcome> {
            Self::offline()
        }
    }

    #[test]
    fn test_unavailable_store_surfaces_error() {
        let service = MatchingService::new(
            Arc::new(OfflineUserStore),
            Arc::new(InMemoryDictionary::new()),
            MatcherSettings::default(),
        );

        let result = service.find_similar_words(&UserId::from("t"));
        assert!(matches!(result, Err(WordMatchError::StoreUnavailable(_))));
        assert!(matches!(service.best_match(&UserId::from("t")), Err(WordMatchError::StoreUnavailable(_))));
    }
}
