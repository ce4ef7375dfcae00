use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mode::GameMode;

const APP_DIR_NAME: &str = "trisnake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failures while reading or writing the score file.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to access score file: {0}")]
    Io(#[from] io::Error),
    #[error("score file is corrupt: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Best score recorded for each game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    classic: u32,
    #[serde(default)]
    tetra: u32,
    #[serde(default)]
    bounce: u32,
}

impl HighScores {
    /// Returns the best score for `mode`.
    #[must_use]
    pub fn for_mode(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Classic => self.classic,
            GameMode::Tetra => self.tetra,
            GameMode::Bounce => self.bounce,
        }
    }

    /// Records `score` for `mode`. Returns true when it beat the old best.
    pub fn record(&mut self, mode: GameMode, score: u32) -> bool {
        let slot = match mode {
            GameMode::Classic => &mut self.classic,
            GameMode::Tetra => &mut self.tetra,
            GameMode::Bounce => &mut self.bounce,
        };
        if score > *slot {
            *slot = score;
            return true;
        }
        false
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads high scores from disk.
///
/// Returns defaults when the score file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_high_scores() -> Result<HighScores, ScoreStoreError> {
    load_high_scores_from_path(&scores_path())
}

/// Saves high scores to disk, creating parent directories when needed.
pub fn save_high_scores(scores: &HighScores) -> Result<(), ScoreStoreError> {
    save_high_scores_to_path(&scores_path(), scores)
}

fn load_high_scores_from_path(path: &Path) -> Result<HighScores, ScoreStoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScores::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_high_scores_to_path(path: &Path, scores: &HighScores) -> Result<(), ScoreStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(scores)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::mode::GameMode;

    use super::{HighScores, load_high_scores_from_path, save_high_scores_to_path};

    #[test]
    fn scores_are_tracked_per_mode() {
        let mut scores = HighScores::default();

        assert!(scores.record(GameMode::Tetra, 12));
        assert_eq!(scores.for_mode(GameMode::Tetra), 12);
        assert_eq!(scores.for_mode(GameMode::Classic), 0);
        assert_eq!(scores.for_mode(GameMode::Bounce), 0);

        // A lower score never overwrites the best.
        assert!(!scores.record(GameMode::Tetra, 5));
        assert_eq!(scores.for_mode(GameMode::Tetra), 12);
    }

    #[test]
    fn score_serialization_round_trip() {
        let path = unique_test_path("round_trip");
        let mut scores = HighScores::default();
        scores.record(GameMode::Classic, 42);
        scores.record(GameMode::Bounce, 7);

        save_high_scores_to_path(&path, &scores).expect("score save should succeed");
        let loaded = load_high_scores_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, scores);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_defaults() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = load_high_scores_from_path(&path).expect("missing file should be defaults");
        assert_eq!(loaded, HighScores::default());
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(
            load_high_scores_from_path(&path).is_err(),
            "malformed file should return Err"
        );

        cleanup_test_path(&path);
    }

    #[test]
    fn partial_score_file_fills_missing_modes_with_zero() {
        let path = unique_test_path("partial");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "classic": 9 }"#).expect("test file write should succeed");

        let loaded = load_high_scores_from_path(&path).expect("partial file should parse");
        assert_eq!(loaded.for_mode(GameMode::Classic), 9);
        assert_eq!(loaded.for_mode(GameMode::Tetra), 0);

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("trisnake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
