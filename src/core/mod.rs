pub mod errors;
pub mod models;

pub use errors::{
    Result,
    WordMatchError,
};
pub use models::{
    Difficulty,
    DictionaryWord,
    MatchCount,
    MatchResult,
    PopulationSnapshot,
    RecommendedWord,
    UpsertOutcome,
    UserId,
    UserWordList,
    WordEntry,
    WordRef,
};
