/// Player configuration
use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Nominal rate published in the now-playing snapshot
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,

    /// Resume after an interruption when the device says it should
    #[serde(default = "default_true")]
    pub resume_after_interruption: bool,

    /// Include the artwork reference in now-playing snapshots
    #[serde(default = "default_true")]
    pub publish_artwork: bool,
}

impl PlayerConfig {
    /// Load configuration from an optional file, overridden by environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with CADENCE_)
        settings =
            settings.add_source(config::Environment::with_prefix("CADENCE").try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| PlaybackError::Config(e.to_string()))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| PlaybackError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.playback_rate.is_finite() || self.playback_rate <= 0.0 {
            return Err(PlaybackError::Config(format!(
                "playback_rate must be a positive number, got {}",
                self.playback_rate
            )));
        }

        Ok(())
    }
}

fn default_playback_rate() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playback_rate: default_playback_rate(),
            resume_after_interruption: default_true(),
            publish_artwork: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.playback_rate, 1.0);
        assert!(config.resume_after_interruption);
        assert!(config.publish_artwork);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_rate() {
        let config = PlayerConfig {
            playback_rate: 0.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(config.validate(), Err(PlaybackError::Config(_))));

        let config = PlayerConfig {
            playback_rate: f64::NAN,
            ..PlayerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "resume_after_interruption = false").unwrap();

        let config = PlayerConfig::load(Some(file.path())).unwrap();
        assert!(!config.resume_after_interruption);
        assert_eq!(config.playback_rate, 1.0);
        assert!(config.publish_artwork);
    }

    #[test]
    fn invalid_file_value_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "playback_rate = -2.0").unwrap();

        let err = PlayerConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, PlaybackError::Config(_)));
    }

    #[test]
    fn deserializes_partial_json() {
        let config: PlayerConfig = serde_json::from_str(r#"{"publish_artwork": false}"#).unwrap();
        assert!(!config.publish_artwork);
        assert!(config.resume_after_interruption);
    }
}
