use std::{
    collections::HashMap,
    path::Path,
    sync::{
        RwLock,
        RwLockReadGuard,
        RwLockWriteGuard,
    },
};

use super::UserStore;
use crate::{
    core::{
        Difficulty,
        PopulationSnapshot,
        Result,
        UpsertOutcome,
        UserId,
        UserWordList,
        WordMatchError,
        WordRef,
    },
    persistence::{
        load_json_required,
        save_json_to,
    },
};

#[derive(Debug, Default)]
struct UserTable {
    lists: Vec<UserWordList>,
    index: HashMap<UserId, usize>, // Position in `lists`
}

impl UserTable {
    fn from_lists(lists: Vec<UserWordList>) -> Result<Self> {
        let mut table = UserTable::default();
        for list in lists {
            table.insert(list)?;
        }
        Ok(table)
    }

    /// Replaces an existing user's list in place so the population order is stable.
    /// Lists that rate a word twice are rejected.
    fn insert(&mut self, list: UserWordList) -> Result<()> {
        list.validate()?;
        match self.index.get(&list.user_id) {
            Some(&position) => self.lists[position] = list,
            None => {
                self.index.insert(list.user_id.clone(), self.lists.len());
                self.lists.push(list);
            }
        }
        Ok(())
    }

    fn remove(&mut self, user_id: &UserId) -> Option<UserWordList> {
        let position = self.index.remove(user_id)?;
        let removed = self.lists.remove(position);
        for (offset, list) in self.lists.iter().enumerate().skip(position) {
            self.index.insert(list.user_id.clone(), offset);
        }
        Some(removed)
    }
}

/// User store kept in memory, in user insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(lists: Vec<UserWordList>) -> Result<Self> {
        Ok(Self { table: RwLock::new(UserTable::from_lists(lists)?) })
    }

    /// The file must exist; a missing store is `StoreUnavailable`, not an empty population.
    pub fn load_from(path: &Path) -> Result<Self> {
        let lists: Vec<UserWordList> = load_json_required(path)?;
        log::info!("Loaded {} word lists from {}", lists.len(), path.display());
        Self::from_lists(lists)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let table = self.read()?;
        save_json_to(&table.lists, path)
    }

    /// Registers a user with an empty list. Returns false if the user exists.
    pub fn add_user(&self, user_id: UserId) -> Result<bool> {
        let mut table = self.write()?;
        if table.index.contains_key(&user_id) {
            return Ok(false);
        }
        table.insert(UserWordList::new(user_id))?;
        Ok(true)
    }

    pub fn insert_list(&self, list: UserWordList) -> Result<()> {
        self.write()?.insert(list)
    }

    pub fn remove_user(&self, user_id: &UserId) -> Result<Option<UserWordList>> {
        Ok(self.write()?.remove(user_id))
    }

    pub fn user_count(&self) -> Result<usize> {
        Ok(self.read()?.lists.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>> {
        self.table
            .read()
            .map_err(|e| WordMatchError::StoreUnavailable(format!("User store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>> {
        self.table
            .write()
            .map_err(|e| WordMatchError::StoreUnavailable(format!("User store lock poisoned: {}", e)))
    }
}

impl UserStore for InMemoryUserStore {
    fn load_all_word_lists(&self) -> Result<PopulationSnapshot> {
        Ok(PopulationSnapshot::new(self.read()?.lists.clone()))
    }

    fn load_word_list(&self, user_id: &UserId) -> Result<UserWordList> {
        let table = self.read()?;
        table
            .index
            .get(user_id)
            .map(|&position| table.lists[position].clone())
            .ok_or_else(|| WordMatchError::NotFound(format!("Word list for user '{}'", user_id)))
    }

    fn upsert_entry(
        &self,
        user_id: &UserId,
        word: WordRef,
        difficulty: Difficulty,
    ) -> Result<UpsertOutcome> {
        let mut table = self.write()?;
        let position = *table
            .index
            .get(user_id)
            .ok_or_else(|| WordMatchError::NotFound(format!("User '{}'", user_id)))?;
        Ok(table.lists[position].upsert(word, difficulty))
    }
}
