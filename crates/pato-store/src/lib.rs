//! Persistence for the single assembled setup record.
//!
//! The snapshot is written as a versioned JSON envelope to one well-known
//! file — the analog of the browser build's persisted `pato-primordial-setup`
//! record. Lifecycle: absent at startup unless previously saved, written on
//! assembly, removed on explicit clear. The stored record is always either
//! fully valid or absent.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pato_logic::setup::AssembledSetup;

/// Version number for the stored envelope (increment when the export key
/// scheme changes).
const STORE_VERSION: u32 = 1;

/// Default file name, matching the original persisted record's key.
pub const DEFAULT_STORE_FILE: &str = "pato-primordial-setup.json";

#[derive(Serialize, Deserialize)]
struct StoredSetup {
    version: u32,
    setup: AssembledSetup,
}

/// Errors that can occur while loading or saving the setup record.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Json(e) => write!(f, "Serialization error: {}", e),
            StoreError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Store version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// File-backed store for exactly one [`AssembledSetup`].
pub struct SetupStore {
    path: PathBuf,
}

impl SetupStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted snapshot. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<AssembledSetup>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredSetup = serde_json::from_str(&text)?;
        if stored.version != STORE_VERSION {
            return Err(StoreError::VersionMismatch {
                expected: STORE_VERSION,
                found: stored.version,
            });
        }
        Ok(Some(stored.setup))
    }

    /// Persist a snapshot, replacing any previous record.
    pub fn save(&self, setup: &AssembledSetup) -> Result<(), StoreError> {
        let stored = StoredSetup { version: STORE_VERSION, setup: setup.clone() };
        let text = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, text)?;
        log::debug!("setup saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the persisted record. Clearing an absent record is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
