//! Where game state lives between turns.
//!
//! - `FileStore`: a save file on disk, JSON or bincode
//! - `MemoryStore`: process-local, for interactive-only play and tests

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{GameState, TOTAL_SEEDS};
use crate::error::StoreError;

/// Encoding of a save file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Human-readable, the historical format.
    #[default]
    Json,
    /// Compact binary snapshot.
    Bincode,
}

impl SaveFormat {
    pub fn encode(self, state: &GameState) -> Result<Vec<u8>, StoreError> {
        Ok(match self {
            SaveFormat::Json => serde_json::to_vec(state)?,
            SaveFormat::Bincode => bincode::serialize(state)?,
        })
    }

    /// Decode and sanity-check a saved state.
    pub fn decode(self, bytes: &[u8]) -> Result<GameState, StoreError> {
        let state: GameState = match self {
            SaveFormat::Json => serde_json::from_slice(bytes)?,
            SaveFormat::Bincode => bincode::deserialize(bytes)?,
        };

        if !state.is_consistent() {
            return Err(StoreError::Corrupt(format!(
                "expected {} seeds, found {}",
                TOTAL_SEEDS,
                state.total_seeds()
            )));
        }

        Ok(state)
    }
}

/// Persistence collaborator for the session.
pub trait StateStore {
    /// Saved state, or `None` if nothing has been saved yet.
    fn load(&mut self) -> Result<Option<GameState>, StoreError>;

    /// Replace the saved state.
    fn save(&mut self, state: &GameState) -> Result<(), StoreError>;
}

/// Save file on disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: SaveFormat,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>, format: SaveFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateStore for FileStore {
    fn load(&mut self) -> Result<Option<GameState>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        self.format.decode(&bytes).map(Some)
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        let bytes = self.format.encode(state)?;
        std::fs::write(&self.path, bytes).map_err(|e| self.io_error(e))
    }
}

/// In-process store. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Option<GameState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state.
    #[must_use]
    pub fn with_state(state: GameState) -> Self {
        Self { state: Some(state) }
    }

    /// Last saved state.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self) -> Result<Option<GameState>, StoreError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        self.state = Some(state.clone());
        Ok(())
    }
}
