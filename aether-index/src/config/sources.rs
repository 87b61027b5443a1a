//! Layered configuration sources.
//!
//! Values are merged left to right from the process environment and a list of
//! optional `.env` files. The first value seen for a key wins; later sources
//! only fill gaps. Nothing here touches the process environment.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::AdminError;

/// Merged key/value view over every configuration source.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Each value with the position of the layer it came from.
    values: HashMap<String, (usize, String)>,
    layers: usize,
}

impl ConfigSources {
    /// Create an empty set of sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the current process environment.
    pub fn from_process_env() -> Self {
        let mut sources = Self::new();
        sources.merge_missing(env::vars());
        sources
    }

    /// Add one layer of pairs, keeping keys that are already present.
    pub fn merge_missing<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let layer = self.layers;
        for (key, value) in pairs {
            self.values.entry(key).or_insert((layer, value));
        }
        self.layers += 1;
    }

    /// Merge a `.env` file, skipping it if it does not exist.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The file was found and merged
    /// * `Ok(false)` - The file does not exist
    /// * `Err(AdminError::ConfigError)` - The file exists but cannot be parsed
    pub fn merge_env_file(&mut self, path: &Path) -> Result<bool, AdminError> {
        if !path.is_file() {
            return Ok(false);
        }

        let iter = dotenv::from_path_iter(path)
            .map_err(|e| AdminError::config(format!("Failed to open {}: {}", path.display(), e)))?;

        let mut pairs = Vec::new();
        for item in iter {
            let pair = item.map_err(|e| {
                AdminError::config(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            pairs.push(pair);
        }

        debug!(path = %path.display(), entries = pairs.len(), "Loaded env file");
        self.merge_missing(pairs);
        Ok(true)
    }

    /// Look up a key. Empty values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|(_, value)| value)
    }

    /// Look up the first of several alias keys.
    ///
    /// The earliest layer holding any of `keys` wins; within one layer,
    /// `keys` order breaks the tie.
    pub fn get_first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.entry(key))
            .min_by_key(|(layer, _)| *layer)
            .map(|(_, value)| value)
    }

    fn entry(&self, key: &str) -> Option<(usize, &str)> {
        self.values
            .get(key)
            .map(|(layer, value)| (*layer, value.as_str()))
            .filter(|(_, value)| !value.trim().is_empty())
    }
}

/// The repository root that the fixed `.env` candidates are relative to.
pub fn repository_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// The `.env` files to consult, in priority order.
///
/// The first `.env` found walking up from `cwd` comes first, followed by the
/// fixed locations under `root`.
pub fn candidate_env_files(cwd: &Path, root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(found) = find_env_file(cwd) {
        candidates.push(found);
    }

    candidates.extend([
        root.join(".env"),
        root.join(".env.local"),
        root.join("backend").join(".env"),
        root.join("frontend").join(".env"),
    ]);

    candidates
}

fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}
