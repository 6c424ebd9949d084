//! High score persistence
//!
//! A single best score, stored as a plain integer. Storage problems are
//! logged and otherwise ignored: a missing or garbled file reads as 0.

use std::fs;
use std::path::{Path, PathBuf};

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

/// Where the best score lives between runs
pub trait HighScoreStore {
    /// Stored best score, 0 if none
    fn read_high_score(&self) -> u64;
    /// Overwrite the stored best score
    fn write_high_score(&mut self, score: u64);
}

/// Write `score` if it beats the stored value. Returns whether it was written.
pub fn record_if_higher(store: &mut impl HighScoreStore, score: u64) -> bool {
    let stored = store.read_high_score();
    if score > stored {
        store.write_high_score(score);
        log::info!("New high score {} (was {})", score, stored);
        true
    } else {
        false
    }
}

/// Plain-text file holding one integer
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn read_high_score(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse::<u64>() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!("Ignoring unreadable high score in {}", self.path.display());
                    0
                }
            },
            Err(e) => {
                log::debug!("No high score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn write_high_score(&mut self, score: u64) {
        if let Err(e) = fs::write(&self.path, score.to_string()) {
            log::warn!("Failed to save high score to {}: {}", self.path.display(), e);
        }
    }
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub score: u64,
    /// Number of writes performed
    pub writes: u32,
}

impl MemoryHighScoreStore {
    pub fn with_score(score: u64) -> Self {
        Self { score, writes: 0 }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn read_high_score(&self) -> u64 {
        self.score
    }

    fn write_high_score(&mut self, score: u64) {
        self.score = score;
        self.writes += 1;
    }
}
