//! Persistent score counters.
//!
//! Only two numbers outlive a session: the best round score and the sum of
//! all round scores. The game talks to them through [`ScoreStore`] and only
//! at game over.
//!
//! - [`MemoryScoreStore`]: in-process, for tests and headless play
//! - [`FileScoreStore`]: `bincode`-encoded [`ScoreRecord`] on disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Score persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Score file is corrupt: {0}")]
    Encoding(#[from] bincode::Error),
}

/// The persisted counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub high_score: u64,
    pub total_score: u64,
}

impl ScoreRecord {
    /// Fold one finished round into the record.
    #[must_use]
    pub fn with_round(self, round_score: u64) -> Self {
        Self {
            high_score: self.high_score.max(round_score),
            total_score: self.total_score.saturating_add(round_score),
        }
    }
}

/// Storage for high and total score.
pub trait ScoreStore {
    fn high_score(&self) -> u64;

    fn total_score(&self) -> u64;

    /// Record a finished round: raise the high score if beaten and add to
    /// the total.
    fn update_scores(&mut self, round_score: u64) -> Result<(), StoreError>;

    /// Forget both counters.
    fn reset_scores(&mut self) -> Result<(), StoreError>;
}

/// Scores kept in memory only.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryScoreStore {
    record: ScoreRecord,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing counters.
    #[must_use]
    pub fn with_record(record: ScoreRecord) -> Self {
        Self { record }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn high_score(&self) -> u64 {
        self.record.high_score
    }

    fn total_score(&self) -> u64 {
        self.record.total_score
    }

    fn update_scores(&mut self, round_score: u64) -> Result<(), StoreError> {
        self.record = self.record.with_round(round_score);
        Ok(())
    }

    fn reset_scores(&mut self) -> Result<(), StoreError> {
        self.record = ScoreRecord::default();
        Ok(())
    }
}

/// Scores kept in a small binary file.
///
/// The record is cached in memory; every update rewrites the file.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    record: ScoreRecord,
}

impl FileScoreStore {
    /// Open a store at `path`. A missing file means both counters are zero.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let record = match fs::read(&path) {
            Ok(bytes) => bincode::deserialize(&bytes)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => ScoreRecord::default(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), ?record, "opened score store");
        Ok(Self { path, record })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    fn persist(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = bincode::serialize(record)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn high_score(&self) -> u64 {
        self.record.high_score
    }

    fn total_score(&self) -> u64 {
        self.record.total_score
    }

    fn update_scores(&mut self, round_score: u64) -> Result<(), StoreError> {
        let record = self.record.with_round(round_score);
        self.persist(&record)?;
        self.record = record;
        Ok(())
    }

    fn reset_scores(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.record = ScoreRecord::default();
        Ok(())
    }
}
