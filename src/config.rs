//! Configuration for Termo
//!
//! Precedence:
//! 1. Explicit `--config` path (must exist)
//! 2. `termo.toml` in the working directory
//! 3. Built-in defaults
//!
//! An absent file is not an error; a malformed one is.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::deadline::HolidaySet;
use crate::error::{TermoError, TermoResult};
use crate::models::{builtin_stores, Store, DEFAULT_DEADLINE, MIN_DEADLINE};

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "termo.toml";

/// Built-in recurring holidays, `DD/MM`
pub const DEFAULT_HOLIDAYS: &[&str] = &["01/01", "25/01"];

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Deadline applied when the form leaves the field blank
    pub default_days: i64,

    /// Contractual minimum deadline
    pub min_days: i64,

    /// Recurring holidays that never count as business days
    pub holidays: HolidaySet,

    /// Store table: built-ins merged with `[stores.<key>]` entries
    pub stores: BTreeMap<String, Store>,
}

/// On-disk shape of `termo.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    deadline: DeadlineSection,

    #[serde(default)]
    stores: BTreeMap<String, Store>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DeadlineSection {
    default_days: i64,
    min_days: i64,
    holidays: Vec<String>,
}

impl Default for DeadlineSection {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_DEADLINE,
            min_days: MIN_DEADLINE,
            holidays: DEFAULT_HOLIDAYS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_DEADLINE,
            min_days: MIN_DEADLINE,
            // The built-in entries are valid DD/MM by construction.
            holidays: HolidaySet::parse(DEFAULT_HOLIDAYS).unwrap_or_default(),
            stores: builtin_stores(),
        }
    }
}

impl Config {
    /// Load from an explicit path. The file must exist and parse.
    pub fn load(path: &Path) -> TermoResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| TermoError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| TermoError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let holidays = HolidaySet::parse(&file.deadline.holidays)?;
        let mut stores = builtin_stores();
        stores.extend(file.stores);

        Ok(Self {
            default_days: file.deadline.default_days,
            min_days: file.deadline.min_days,
            holidays,
            stores,
        })
    }

    /// Resolve configuration for a run.
    ///
    /// `explicit` comes from `--config` and must load; otherwise
    /// `<cwd>/termo.toml` is used when present, defaults when not.
    pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> TermoResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = cwd.join(CONFIG_FILE);
        if local.exists() {
            return Self::load(&local);
        }
        Ok(Self::default())
    }

    /// Look up a store by key.
    pub fn store(&self, key: &str) -> TermoResult<&Store> {
        self.stores.get(key).ok_or_else(|| TermoError::UnknownStore {
            key: key.to_string(),
            known: self.stores.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }
}
