//! Behavior flags
//!
//! Persisted by the host (the storage backend is an external collaborator);
//! the engine only reads them. Both flags may be toggled at any time,
//! including between a spin completing and its exclusion timer firing.

use serde::{Deserialize, Serialize};

/// Engine behavior settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Exclude a selected entry from the pool 2 seconds after selection
    /// (unless it is the last active entry). Checked again when the timer
    /// fires, so disabling mid-flight suppresses the exclusion.
    pub auto_exclude_enabled: bool,
    /// Clear the displayed selection once the timer actually excludes it
    pub clear_selection_after_exclude: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_exclude_enabled: true,
            clear_selection_after_exclude: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.auto_exclude_enabled);
        assert!(!settings.clear_selection_after_exclude);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            auto_exclude_enabled: false,
            clear_selection_after_exclude: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
