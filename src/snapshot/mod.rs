use crate::{Contribution, CreditsIssue, LanguageCredits, Stage, Stash};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading snapshot files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Credits page input: languages in display order plus detected issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreditsSnapshot {
    #[serde(default)]
    pub languages: Vec<LanguageCredits>,
    #[serde(default)]
    pub issues: Vec<CreditsIssue>,
}

/// Read and deserialize a JSON snapshot.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "loaded snapshot");

    serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_stage(path: &Path) -> Result<Stage> {
    let stage: Stage = load(path)?;
    debug!(edits = stage.edits.len(), "stage snapshot");
    Ok(stage)
}

/// Load a list of stashes.
pub fn load_stashes(path: &Path) -> Result<Vec<Stash>> {
    load(path)
}

pub fn load_contribution(path: &Path) -> Result<Contribution> {
    load(path)
}

pub fn load_credits(path: &Path) -> Result<CreditsSnapshot> {
    let credits: CreditsSnapshot = load(path)?;
    debug!(
        languages = credits.languages.len(),
        issues = credits.issues.len(),
        "credits snapshot"
    );
    Ok(credits)
}

/// Load a language code to display name map.
pub fn load_language_names(path: &Path) -> Result<HashMap<String, String>> {
    load(path)
}
