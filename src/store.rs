//! On-device storage of the single "current trip" identifier.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TRIP_ID_FILE;
use crate::prelude::*;

/// Identifier assigned to a trip by the remote API. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "String", into = "String")]
pub struct TripId(String);

impl TripId {
    /// # Errors
    /// Returns `StoreError::EmptyTripId` if `id` is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyTripId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TripId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Trip id is empty")]
    EmptyTripId,

    #[error("Could not access trip storage: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value storage for the id of the trip the user is viewing.
pub trait TripStore {
    /// The saved trip id, if any.
    fn get(&self) -> Result<Option<TripId>, StoreError>;

    fn save(&mut self, id: &TripId) -> Result<(), StoreError>;

    /// Forgets the saved id. Removing when nothing is saved succeeds.
    fn remove(&mut self) -> Result<(), StoreError>;
}

/// Store that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryTripStore {
    current: Option<TripId>,
}

impl MemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TripStore for MemoryTripStore {
    fn get(&self) -> Result<Option<TripId>, StoreError> {
        Ok(self.current.clone())
    }

    fn save(&mut self, id: &TripId) -> Result<(), StoreError> {
        self.current = Some(id.clone());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.current = None;
        Ok(())
    }
}

/// Store backed by one small file inside a directory.
#[derive(Debug, Clone)]
pub struct FileTripStore {
    path: PathBuf,
}

impl FileTripStore {
    /// Uses `dir` to hold the trip id file. The directory is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TRIP_ID_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TripStore for FileTripStore {
    fn get(&self) -> Result<Option<TripId>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(TripId::new(contents).ok()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, id: &TripId) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, id.as_str())?;
        tracing::debug!(trip_id = %id, path = %self.path.display(), "saved current trip");
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed current trip");
                Ok(())
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
