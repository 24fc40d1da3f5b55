use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::Result,
    persistence::{
        config_file_path,
        load_json_from,
        load_json_or_default,
        save_json_to,
    },
};

pub const SETTINGS_FILE: &str = "matcher_settings.json";

pub const DEFAULT_THRESHOLD: u32 = 2;
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    /// Easy and medium buckets must exceed this to win. The difficult bucket
    /// is the fallback and is never checked against it.
    pub threshold: u32,
    /// Drop the target user from the candidate pool.
    pub exclude_self: bool,
    /// Count candidates on the rayon pool.
    pub parallel: bool,
    pub recent_limit: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            exclude_self: false,
            parallel: true,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl MatcherSettings {
    /// Settings from the platform config dir, defaults when absent or unreadable.
    pub fn load() -> Self {
        Self::load_or_default(&config_file_path(SETTINGS_FILE))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path(SETTINGS_FILE))
    }

    pub fn load_or_default(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        load_json_from(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        save_json_to(self, path)
    }
}
