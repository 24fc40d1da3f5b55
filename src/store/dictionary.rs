use std::{
    collections::HashMap,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::DictionaryStore;
use crate::{
    core::{
        DictionaryWord,
        Result,
        WordMatchError,
        WordRef,
    },
    persistence::{
        load_json_required,
        save_json_to,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DictionaryRecord {
    id: WordRef,
    word: String,
    definitions: Vec<String>,
}

#[derive(Debug, Default)]
pub struct InMemoryDictionary {
    words: HashMap<WordRef, DictionaryWord>,
    by_text: HashMap<String, WordRef>, // Lowercased text
    order: Vec<WordRef>,
}

impl InMemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word, or replaces the definitions of a word with the same text.
    pub fn insert(&mut self, text: &str, definitions: Vec<String>) -> WordRef {
        let key = text.to_lowercase();
        if let Some(&existing) = self.by_text.get(&key) {
            if let Some(entry) = self.words.get_mut(&existing) {
                entry.definitions = definitions;
            }
            return existing;
        }

        let id = WordRef::new_v4();
        self.push_word(id, key, definitions);
        id
    }

    /// Adds a stored record. Its id and its text must both be new.
    fn insert_record(&mut self, record: DictionaryRecord) -> Result<()> {
        if self.words.contains_key(&record.id) {
            return Err(WordMatchError::DataIntegrity(format!(
                "Dictionary id {} appears more than once",
                record.id
            )));
        }
        let key = record.word.to_lowercase();
        if let Some(existing) = self.by_text.get(&key) {
            return Err(WordMatchError::DataIntegrity(format!(
                "Dictionary word '{}' is stored as both {} and {}",
                key, existing, record.id
            )));
        }
        self.push_word(record.id, key, record.definitions);
        Ok(())
    }

    fn push_word(&mut self, id: WordRef, text: String, definitions: Vec<String>) {
        self.by_text.insert(text.clone(), id);
        self.words.insert(id, DictionaryWord { text, definitions });
        self.order.push(id);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let records: Vec<DictionaryRecord> = load_json_required(path)?;
        let mut dictionary = Self::new();
        for record in records {
            dictionary.insert_record(record)?;
        }
        log::info!("Loaded {} dictionary words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let records: Vec<DictionaryRecord> = self
            .order
            .iter()
            .filter_map(|id| {
                self.words.get(id).map(|word| DictionaryRecord {
                    id: *id,
                    word: word.text.clone(),
                    definitions: word.definitions.clone(),
                })
            })
            .collect();
        save_json_to(&records, path)
    }
}

impl DictionaryStore for InMemoryDictionary {
    fn resolve(&self, word: &WordRef) -> Result<DictionaryWord> {
        self.words
            .get(word)
            .cloned()
            .ok_or_else(|| WordMatchError::NotFound(format!("Dictionary word {}", word)))
    }

    fn lookup(&self, text: &str) -> Option<WordRef> {
        self.by_text.get(&text.to_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut dictionary = InMemoryDictionary::new();
        let id = dictionary.insert("Serendipity", vec!["a happy accident".to_string()]);

        assert_eq!(dictionary.lookup("serendipity"), Some(id));
        assert_eq!(dictionary.lookup("SERENDIPITY"), Some(id));
        assert_eq!(dictionary.lookup("luck"), None);
        assert_eq!(dictionary.resolve(&id).unwrap().text, "serendipity");
    }

    #[test]
    fn test_reinsert_replaces_definitions() {
        let mut dictionary = InMemoryDictionary::new();
        let first = dictionary.insert("gist", vec![]);
        let second = dictionary.insert("GIST", vec!["the main point".to_string()]);

        assert_eq!(first, second);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.resolve(&first).unwrap().definitions, vec!["the main point"]);
    }

    #[test]
    fn test_unknown_ref_is_not_found() {
        let dictionary = InMemoryDictionary::new();
        assert!(matches!(dictionary.resolve(&WordRef::new_v4()), Err(WordMatchError::NotFound(_))));
    }

    #[test]
    fn test_file_round_trip_keeps_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");

        let mut dictionary = InMemoryDictionary::new();
        let id = dictionary.insert("ephemeral", vec!["short-lived".to_string()]);
        dictionary.save_to(&path).unwrap();

        let loaded = InMemoryDictionary::load_from(&path).unwrap();
        assert_eq!(loaded.lookup("ephemeral"), Some(id));
        assert_eq!(loaded.resolve(&id).unwrap().definitions, vec!["short-lived"]);
    }

    #[test]
    fn test_load_rejects_repeated_ids_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        let id = WordRef::new_v4();

        let same_id = vec![
            DictionaryRecord { id, word: "terse".into(), definitions: vec!["brief".into()] },
            DictionaryRecord { id, word: "curt".into(), definitions: vec!["abrupt".into()] },
        ];
        save_json_to(&same_id, &path).unwrap();
        assert!(matches!(InMemoryDictionary::load_from(&path), Err(WordMatchError::DataIntegrity(_))));

        let same_text = vec![
            DictionaryRecord { id, word: "terse".into(), definitions: vec!["brief".into()] },
            DictionaryRecord { id: WordRef::new_v4(), word: "Terse".into(), definitions: vec![] },
        ];
        save_json_to(&same_text, &path).unwrap();
        assert!(matches!(InMemoryDictionary::load_from(&path), Err(WordMatchError::DataIntegrity(_))));
    }

    #[test]
    fn test_missing_file_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = InMemoryDictionary::load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(WordMatchError::StoreUnavailable(_))));
    }
}
