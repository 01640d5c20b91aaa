use dial_engine::paint::ColorParseError;
use thiserror::Error;

/// Rejected clock configuration input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be within 0..=1 (or a percentage up to 100), got {value}")]
    OutOfRange { field: &'static str, value: f32 },

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
}
