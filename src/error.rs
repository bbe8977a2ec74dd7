use std::fmt;
use std::io;

#[derive(Debug)]
pub enum BankError {
    Config(ConfigError),
    Json(serde_json::Error),
    Io(io::Error),
    #[cfg(feature = "wav")]
    Wav(hound::Error),
}

/// Constants or data that cannot form a valid bank. Raised before any synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    TooFewFrames { frames: usize },
    NoSamples,
    InvalidIdentifier { field: &'static str, value: String },
    ShapeMismatch { expected: usize, actual: usize },
    ShapeOverflow { frames: usize, samples: usize },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Config(e) => write!(f, "Config error: {e}"),
            BankError::Json(e) => write!(f, "JSON error: {e}"),
            BankError::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "wav")]
            BankError::Wav(e) => write!(f, "WAV error: {e}"),
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BankError::Config(e) => Some(e),
            BankError::Json(e) => Some(e),
            BankError::Io(e) => Some(e),
            #[cfg(feature = "wav")]
            BankError::Wav(e) => Some(e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewFrames { frames } => {
                write!(f, "At least 2 frames are required, got {frames}")
            }
            ConfigError::NoSamples => write!(f, "Frames must hold at least 1 sample"),
            ConfigError::InvalidIdentifier { field, value } => {
                write!(f, "'{value}' is not a valid C identifier for {field}")
            }
            ConfigError::ShapeMismatch { expected, actual } => {
                write!(f, "Expected {expected} samples for the bank shape, got {actual}")
            }
            ConfigError::ShapeOverflow { frames, samples } => {
                write!(f, "A bank of {frames} x {samples} samples is too large")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for BankError {
    fn from(e: ConfigError) -> Self {
        BankError::Config(e)
    }
}

impl From<io::Error> for BankError {
    fn from(e: io::Error) -> Self {
        BankError::Io(e)
    }
}

impl From<serde_json::Error> for BankError {
    fn from(e: serde_json::Error) -> Self {
        BankError::Json(e)
    }
}

#[cfg(feature = "wav")]
impl From<hound::Error> for BankError {
    fn from(e: hound::Error) -> Self {
        BankError::Wav(e)
    }
}
