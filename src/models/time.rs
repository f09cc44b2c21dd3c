use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a time or numeric field cannot be interpreted.
///
/// Always names the offending field so batch callers can attribute the
/// failure to one input column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("field '{field}': cannot parse '{value}' as a time (expected HH:MM or whole minutes)")]
    Time { field: &'static str, value: String },
    #[error("field '{field}': cannot parse '{value}' as a number")]
    Number { field: &'static str, value: String },
}

/// Minutes since the reference midnight (00:00).
///
/// All scheduling arithmetic happens in this single linear unit; wall-clock
/// representations are normalized into it at the ingestion boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Minutes(i32);

impl Minutes {
    /// Create a new minute count.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw minute count as i32.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Normalize a wall-clock string into minutes since midnight.
    ///
    /// Accepts either `HH:MM` (hours 0-23, minutes 0-59) or a plain
    /// non-negative whole-minute count, the two representations the
    /// ingestion sources produce. `field` names the input column for
    /// error attribution.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Time {
                field,
                value: value.to_string(),
            });
        }

        if trimmed.contains(':') {
            let time = chrono::NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| {
                ParseError::Time {
                    field,
                    value: value.to_string(),
                }
            })?;
            use chrono::Timelike;
            return Ok(Self::new((time.hour() * 60 + time.minute()) as i32));
        }

        match trimmed.parse::<i32>() {
            Ok(minutes) if minutes >= 0 => Ok(Self::new(minutes)),
            _ => Err(ParseError::Time {
                field,
                value: value.to_string(),
            }),
        }
    }
}

impl From<i32> for Minutes {
    fn from(value: i32) -> Self {
        Minutes::new(value)
    }
}

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0.rem_euclid(60))
    }
}
