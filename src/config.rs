//! Bank shape and artifact naming.
//!
//! The downstream engine compiles the table shape in, so these values are
//! build-time constants. A JSON file can override them for alternative
//! targets; anything left out falls back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bank::checked_len;
use crate::error::{BankError, ConfigError};

/// Samples per frame (one single-cycle waveform).
pub const SAMPLES: usize = 2048;
/// Frames per bank (morph positions).
pub const FRAMES: usize = 64;
/// Name of the emitted table declaration.
pub const DEFAULT_SYMBOL: &str = "WAVETABLE_BANK";
/// Include guard of the emitted header.
pub const DEFAULT_GUARD: &str = "WAVETABLES_H";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BankConfig {
    /// Number of frames. Must be at least 2 so the morph parameter is defined.
    pub frames: usize,
    /// Samples per frame.
    pub samples: usize,
    pub symbol: String,
    pub guard: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            frames: FRAMES,
            samples: SAMPLES,
            symbol: DEFAULT_SYMBOL.to_string(),
            guard: DEFAULT_GUARD.to_string(),
        }
    }
}

impl BankConfig {
    /// Shape-only config, with default naming.
    pub fn with_shape(frames: usize, samples: usize) -> Self {
        BankConfig {
            frames,
            samples,
            ..Default::default()
        }
    }

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let config: BankConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject constants that cannot yield a well-formed bank and header.
    /// Returns the total number of values in the bank.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let len = checked_len(self.frames, self.samples)?;
        check_identifier("symbol", &self.symbol)?;
        check_identifier("guard", &self.guard)?;
        Ok(len)
    }
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_shape() {
        let config = BankConfig::default();
        assert_eq!(config.frames, 64);
        assert_eq!(config.samples, 2048);
        assert_eq!(config.symbol, "WAVETABLE_BANK");
        assert_eq!(config.guard, "WAVETABLES_H");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_frame_rejected() {
        let err = BankConfig::with_shape(1, 2048).validate().unwrap_err();
        assert_eq!(err, ConfigError::TooFewFrames { frames: 1 });
        let err = BankConfig::with_shape(0, 2048).validate().unwrap_err();
        assert_eq!(err, ConfigError::TooFewFrames { frames: 0 });
    }

    #[test]
    fn empty_frames_rejected() {
        let err = BankConfig::with_shape(64, 0).validate().unwrap_err();
        assert_eq!(err, ConfigError::NoSamples);
    }

    #[test]
    fn oversized_shape_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        let err = BankConfig::with_shape(huge, huge).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::ShapeOverflow {
                frames: huge,
                samples: huge
            }
        );
    }

    #[test]
    fn validate_reports_total_length() {
        assert_eq!(BankConfig::default().validate(), Ok(64 * 2048));
    }

    #[test]
    fn bad_identifiers_rejected() {
        let mut config = BankConfig::default();
        config.symbol = "1TABLE".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIdentifier { field: "symbol", .. })
        ));

        let mut config = BankConfig::default();
        config.guard = "WAVE TABLES".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidIdentifier { field: "guard", .. })
        ));

        let mut config = BankConfig::default();
        config.guard = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_partial_uses_defaults() {
        let config = BankConfig::from_json(r#"{ "frames": 8, "samples": 256 }"#).unwrap();
        assert_eq!(config.frames, 8);
        assert_eq!(config.samples, 256);
        assert_eq!(config.symbol, DEFAULT_SYMBOL);
        assert_eq!(config.guard, DEFAULT_GUARD);
    }

    #[test]
    fn json_unknown_field_rejected() {
        let result = BankConfig::from_json(r#"{ "frames": 8, "headroom": 1.0 }"#);
        assert!(matches!(result, Err(BankError::Json(_))));
    }

    #[test]
    fn json_roundtrip() {
        let config = BankConfig {
            frames: 16,
            samples: 512,
            symbol: "MORPH_TABLE".to_string(),
            guard: "MORPH_TABLE_H".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BankConfig::from_json(&json).unwrap(), config);
    }
}
