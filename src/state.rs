//! Last-term persistence
//!
//! The last generated term is kept as pretty JSON in a fixed-name file so the
//! next form starts pre-filled. A missing or corrupt file is treated as "no
//! previous term", never as an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::DeliveryTerm;

const STATE_FILE: &str = ".termo-state.json";

/// Persisted state between runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LastTerm {
    /// The most recently generated term, if any
    #[serde(default)]
    pub term: Option<DeliveryTerm>,
}

impl LastTerm {
    /// Load state from `<dir>/.termo-state.json`
    pub fn load(dir: &Path) -> Self {
        let state_file = dir.join(STATE_FILE);
        if state_file.exists() {
            if let Ok(content) = fs::read_to_string(&state_file) {
                if let Ok(state) = serde_json::from_str(&content) {
                    return state;
                }
            }
        }
        Self::default()
    }

    /// Save state to `<dir>/.termo-state.json`, creating the directory
    pub fn save(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(STATE_FILE), content)
    }

    /// Record a freshly generated term and save
    pub fn remember(&mut self, term: DeliveryTerm, dir: &Path) {
        self.term = Some(term);
        let _ = self.save(dir);
    }
}

/// Directory holding the state file.
///
/// `TERMO_STATE_DIR` overrides everything (used by tests and scripts);
/// otherwise the per-user data directory, falling back to the working
/// directory on platforms without one.
pub fn state_dir(cwd: &Path) -> PathBuf {
    if let Ok(dir) = std::env::var("TERMO_STATE_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_dir()
        .map(|d| d.join("termo"))
        .unwrap_or_else(|| cwd.to_path_buf())
}
