//! Startup asset check
//!
//! The simulation never touches images, but the game must not start when
//! the renderer's sprites are missing.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Sprites the renderer needs: background, bike, obstacle wall
pub const REQUIRED_ASSETS: [&str; 3] = ["bg.jpg", "bike.jpg", "wall.png"];

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing assets in {dir}: {}", .missing.join(", "))]
    MissingAssets { dir: PathBuf, missing: Vec<String> },
}

/// Check that every required asset exists under `dir`
pub fn verify_assets(dir: &Path) -> Result<(), StartupError> {
    let missing: Vec<String> = REQUIRED_ASSETS
        .iter()
        .filter(|name| !dir.join(name).is_file())
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        log::debug!("All {} assets present in {}", REQUIRED_ASSETS.len(), dir.display());
        Ok(())
    } else {
        Err(StartupError::MissingAssets {
            dir: dir.to_path_buf(),
            missing,
        })
    }
}
