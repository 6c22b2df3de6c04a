//! Session configuration
//!
//! Defaults, optionally overridden by a TOML file, then by command-line
//! flags in `main.rs`.
//!
//! ```toml
//! user = "alice"
//! hostname = "devbox"
//! home = "/home/alice"
//! state_dir = "/var/lib/simsh"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::SessionEnv;
use crate::fs::{FileStore, KeyValueStore, MemoryStore, DEFAULT_HOME, DEFAULT_STORAGE_KEY};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    pub user: String,
    pub hostname: String,
    /// Home directory seeded into a fresh file system and used by `cd`
    pub home: String,
    /// Store key the snapshot lives under
    pub storage_key: String,
    /// Directory holding persisted snapshots. Falls back to the platform
    /// data directory.
    pub state_dir: Option<PathBuf>,
    /// Keep everything in memory; nothing survives the process.
    pub ephemeral: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            hostname: "linux".to_string(),
            home: DEFAULT_HOME.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            state_dir: None,
            ephemeral: false,
        }
    }
}

impl ShellOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Platform data directory for snapshots, e.g. `~/.local/share/simsh`.
    pub fn default_state_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "simsh").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn resolved_state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .or_else(Self::default_state_dir)
            .unwrap_or_else(|| PathBuf::from(".simsh"))
    }

    /// Backing store for the session's snapshot.
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        if self.ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::new(self.resolved_state_dir()))
        }
    }

    pub fn session_env(&self) -> SessionEnv {
        SessionEnv {
            user: self.user.clone(),
            hostname: self.hostname.clone(),
            ..SessionEnv::default()
        }
    }
}
