use crate::{
    core::{
        MatchResult,
        RecommendedWord,
        Result,
        WordEntry,
        WordMatchError,
    },
    store::{
        DictionaryStore,
        UserStore,
    },
};

/// Display record for one rated word. A word that resolves without any
/// definition is a `DataIntegrity` error, never an empty meaning.
pub fn enrich_entry(dictionary: &dyn DictionaryStore, entry: &WordEntry) -> Result<RecommendedWord> {
    let word = dictionary.resolve(&entry.word)?;
    let meaning = word.definitions.into_iter().next().ok_or_else(|| {
        WordMatchError::DataIntegrity(format!("Word '{}' ({}) has no definitions", word.text, entry.word))
    })?;

    Ok(RecommendedWord { word: word.text, meaning, difficulty: entry.difficulty })
}

/// Enriches entries in order. All or nothing.
pub fn enrich_entries<'a, I>(dictionary: &dyn DictionaryStore, entries: I) -> Result<Vec<RecommendedWord>>
where
    I: IntoIterator<Item = &'a WordEntry>,
{
    entries.into_iter().map(|entry| enrich_entry(dictionary, entry)).collect()
}

/// Re-reads the winner's list and returns its words in the winning bucket,
/// in the winner's own list order.
pub fn assemble(
    users: &dyn UserStore,
    dictionary: &dyn DictionaryStore,
    result: &MatchResult,
) -> Result<Vec<RecommendedWord>> {
    let list = users.load_word_list(&result.user_id)?;
    enrich_entries(
        dictionary,
        list.entries.iter().filter(|entry| entry.difficulty == result.difficulty),
    )
}
