use std::{
    collections::{
        HashMap,
        HashSet,
    },
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use super::WordMatchError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

/// Opaque reference to a canonical dictionary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordRef(pub Uuid);

impl WordRef {
    pub fn new_v4() -> Self {
        WordRef(Uuid::new_v4())
    }
}

impl fmt::Display for WordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Difficult,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Difficult];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Exact lowercase names only, "Easy" is rejected like any other unknown option
impl FromStr for Difficulty {
    type Err = WordMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "difficult" => Ok(Difficulty::Difficult),
            other => Err(WordMatchError::InvalidDifficulty(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: WordRef,
    pub difficulty: Difficulty,
}

impl WordEntry {
    pub fn new(word: WordRef, difficulty: Difficulty) -> Self {
        Self { word, difficulty }
    }
}

/// A user's rated words. Logically a map from word to difficulty, but the
/// insertion order is kept for "recent" views and for recommendation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWordList {
    pub user_id: UserId,
    pub entries: Vec<WordEntry>,
}

impl UserWordList {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id, entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn difficulty_of(&self, word: &WordRef) -> Option<Difficulty> {
        self.entries.iter().find(|entry| entry.word == *word).map(|entry| entry.difficulty)
    }

    /// Appends a new rating, or changes the existing one in place.
    pub fn upsert(&mut self, word: WordRef, difficulty: Difficulty) -> UpsertOutcome {
        match self.entries.iter_mut().find(|entry| entry.word == word) {
            Some(entry) => {
                let previous = entry.difficulty;
                entry.difficulty = difficulty;
                UpsertOutcome::Updated { previous }
            }
            None => {
                self.entries.push(WordEntry::new(word, difficulty));
                UpsertOutcome::Inserted
            }
        }
    }

    /// At most one entry per word. The hash join in aggregation relies on it.
    pub fn validate(&self) -> Result<(), WordMatchError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.word) {
                return Err(WordMatchError::DataIntegrity(format!(
                    "User '{}' rated word {} more than once",
                    self.user_id, entry.word
                )));
            }
        }
        Ok(())
    }

    /// Index of the list keyed by word, used as the build side of the hash join.
    pub fn index(&self) -> HashMap<WordRef, Difficulty> {
        self.entries.iter().map(|entry| (entry.word, entry.difficulty)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UpsertOutcome {
    Inserted,
    Updated { previous: Difficulty },
}

/// All users' word lists for one matching run. Iterates in the order the
/// lists were added, which is the order ties are broken in.
#[derive(Debug, Clone, Default)]
pub struct PopulationSnapshot {
    lists: Vec<UserWordList>,
}

impl PopulationSnapshot {
    pub fn new(lists: Vec<UserWordList>) -> Self {
        Self { lists }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserWordList> {
        self.lists.iter()
    }

    pub fn lists(&self) -> &[UserWordList] {
        &self.lists
    }
}

impl FromIterator<UserWordList> for PopulationSnapshot {
    fn from_iter<I: IntoIterator<Item = UserWordList>>(iter: I) -> Self {
        Self { lists: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PopulationSnapshot {
    type Item = &'a UserWordList;
    type IntoIter = std::slice::Iter<'a, UserWordList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCount {
    pub user_id: UserId,
    pub easy: u32,
    pub medium: u32,
    pub difficult: u32,
}

impl MatchCount {
    pub fn zero(user_id: UserId) -> Self {
        Self { user_id, easy: 0, medium: 0, difficult: 0 }
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Difficult => self.difficult,
        }
    }

    pub fn increment(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Difficult => self.difficult += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.difficult
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub user_id: UserId,
    pub difficulty: Difficulty,
}

/// Canonical dictionary record as returned by the dictionary collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryWord {
    pub text: String,
    pub definitions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedWord {
    pub word: String,
    pub meaning: String,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("difficult".parse::<Difficulty>().unwrap(), Difficulty::Difficult);

        for bad in ["Easy", "hard", "", " easy"] {
            match bad.parse::<Difficulty>() {
                Err(WordMatchError::InvalidDifficulty(value)) => assert_eq!(value, bad),
                other => panic!("Expected InvalidDifficulty for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Difficult).unwrap();
        assert_eq!(json, "\"difficult\"");
        let parsed: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Difficulty::Medium);
    }

    #[test]
    fn test_upsert_keeps_one_entry_per_word() {
        let mut list = UserWordList::new(UserId::from("alice"));
        let w1 = WordRef::new_v4();
        let w2 = WordRef::new_v4();

        assert_eq!(list.upsert(w1, Difficulty::Easy), UpsertOutcome::Inserted);
        assert_eq!(list.upsert(w2, Difficulty::Medium), UpsertOutcome::Inserted);
        assert_eq!(
            list.upsert(w1, Difficulty::Difficult),
            UpsertOutcome::Updated { previous: Difficulty::Easy }
        );

        assert_eq!(list.len(), 2);
        // Re-rating mutates in place, the word stays first
        assert_eq!(list.entries[0], WordEntry::new(w1, Difficulty::Difficult));
        assert_eq!(list.difficulty_of(&w2), Some(Difficulty::Medium));
    }

    #[test]
    fn test_validate_rejects_repeated_word() {
        let w = WordRef::new_v4();
        let mut list = UserWordList::new(UserId::from("dup"));
        list.upsert(w, Difficulty::Easy);
        list.upsert(WordRef::new_v4(), Difficulty::Easy);
        assert!(list.validate().is_ok());

        list.entries.push(WordEntry::new(w, Difficulty::Medium));
        assert!(matches!(list.validate(), Err(WordMatchError::DataIntegrity(_))));
    }

    #[test]
    fn test_match_count_buckets() {
        let mut count = MatchCount::zero(UserId::from("bob"));
        count.increment(Difficulty::Easy);
        count.increment(Difficulty::Easy);
        count.increment(Difficulty::Difficult);

        assert_eq!(count.get(Difficulty::Easy), 2);
        assert_eq!(count.get(Difficulty::Medium), 0);
        assert_eq!(count.get(Difficulty::Difficult), 1);
        assert_eq!(count.total(), 3);
    }
}
