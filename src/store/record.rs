//! On-disk shape of a saved game

use serde::{Deserialize, Serialize};

/// Bumped whenever the record layout changes; older records are discarded
pub const SCHEMA_VERSION: u32 = 1;

/// A saved game exactly as it is persisted
///
/// Fields are kept as plain strings so that a damaged file still
/// deserializes and can be rejected field by field when the game is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    /// `YYYY-MM-DD/<answer index>`
    pub secret_id: String,
    pub guesses: Vec<String>,
    /// One `x`/`c`/`_` string per guess
    pub verdicts: Vec<String>,
    /// Letters typed but not yet submitted
    #[serde(default)]
    pub draft: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_game_json_layout() {
        let saved = SavedGame {
            version: SCHEMA_VERSION,
            secret_id: "2026-10-17/4".to_string(),
            guesses: vec!["crane".to_string()],
            verdicts: vec!["__x_x".to_string()],
            draft: "sl".to_string(),
        };

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": 1,
                "secret_id": "2026-10-17/4",
                "guesses": ["crane"],
                "verdicts": ["__x_x"],
                "draft": "sl",
            })
        );
    }

    #[test]
    fn draft_defaults_to_empty() {
        let json = r#"{"version":1,"secret_id":"2026-10-17/4","guesses":[],"verdicts":[]}"#;
        let saved: SavedGame = serde_json::from_str(json).unwrap();
        assert!(saved.draft.is_empty());
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        let json = r#"{"version":1,"guesses":[]}"#;
        assert!(serde_json::from_str::<SavedGame>(json).is_err());
    }
}
