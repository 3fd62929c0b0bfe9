//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::{BoardSize, GameMode, Mark, SessionSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
///
/// ```toml
/// think_ms = 250
///
/// [game]
/// size = 5
/// mode = "single"
/// player_mark = "O"
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board size, mode and player mark.
    #[serde(default)]
    game: SessionSettings,

    /// Pause before the AI moves, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,
}

#[instrument]
fn default_think_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            game: SessionSettings::default(),
            think_ms: default_think_ms(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = %config.game.size(), mode = %config.game.mode(), "Config loaded successfully");
        Ok(config)
    }

    /// Replaces file values with any flags given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        size: Option<BoardSize>,
        mode: Option<GameMode>,
        player_mark: Option<Mark>,
        think_ms: Option<u64>,
    ) -> Self {
        let game = SessionSettings::new(
            size.unwrap_or(*self.game.size()),
            mode.unwrap_or(*self.game.mode()),
            player_mark.unwrap_or(*self.game.player_mark()),
        );
        Self {
            game,
            think_ms: think_ms.unwrap_or(self.think_ms),
        }
    }

    /// AI pause as a duration.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_full_config() {
        let file = write_config(
            r#"
think_ms = 0

[game]
size = 5
mode = "two"
player_mark = "O"
"#,
        );
        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.think_ms(), 0);
        assert_eq!(*config.game().size(), BoardSize::Five);
        assert_eq!(*config.game().mode(), GameMode::Two);
        assert_eq!(*config.game().player_mark(), Mark::O);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = write_config("[game]\nsize = 5\n");
        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.think_ms(), 500);
        assert_eq!(*config.game().size(), BoardSize::Five);
        assert_eq!(*config.game().mode(), GameMode::Single);
        assert_eq!(*config.game().player_mark(), Mark::X);
    }

    #[test]
    fn test_rejects_unsupported_size() {
        let file = write_config("[game]\nsize = 4\n");
        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = PlayConfig::from_file("/nonexistent/noughts.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = PlayConfig::default().with_overrides(Some(BoardSize::Five), None, Some(Mark::O), Some(10));
        assert_eq!(*config.game().size(), BoardSize::Five);
        assert_eq!(*config.game().mode(), GameMode::Single);
        assert_eq!(*config.game().player_mark(), Mark::O);
        assert_eq!(config.think_delay(), Duration::from_millis(10));
    }
}
