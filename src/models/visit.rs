//! Visit records and their construction-time validation.
//!
//! A [`Visit`] is immutable once constructed: the scheduling engine only
//! reorders and copies records, it never rewrites their fields. All input
//! checking happens here, at the boundary, so the enumerator and ranker can
//! assume every record they see is structurally valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::time::{Minutes, ParseError};

/// Priority assigned when an ingestion source supplies none (0 = highest).
pub const DEFAULT_PRIORITY: i32 = 0;

/// Error raised when a visit record or query parameter violates a
/// structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),
    #[error("visit name must not be empty")]
    EmptyName,
    #[error("window ends at {end} before it starts at {start}")]
    WindowInverted { start: Minutes, end: Minutes },
    #[error("visit list is empty")]
    EmptyVisitSet,
    #[error("visit duration must be positive, got {0} minutes")]
    NonPositiveDuration(i32),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Opaque positional identifier for a visit.
///
/// Carried through scheduling unchanged; neither field is ever consulted by
/// the engine. Sources may supply an address, a coordinate pair, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: String,
    /// "latitude,longitude" pair, e.g. "-33.8688,151.2093".
    #[serde(default)]
    pub coordinate: String,
}

impl Location {
    pub fn new(address: impl Into<String>, coordinate: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            coordinate: coordinate.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.address.is_empty(), self.coordinate.is_empty()) {
            (false, false) => write!(f, "{} ({})", self.address, self.coordinate),
            (false, true) => write!(f, "{}", self.address),
            (true, false) => write!(f, "{}", self.coordinate),
            (true, true) => write!(f, "unknown location"),
        }
    }
}

/// Permitted time window of a visit, inclusive on both ends.
///
/// Deserialization funnels through [`Window::new`], so wire input cannot
/// produce an inverted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedWindow")]
pub struct Window {
    pub start: Minutes,
    pub end: Minutes,
}

impl Window {
    /// Build a window, rejecting `end < start`.
    pub fn new(start: Minutes, end: Minutes) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::WindowInverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Earliest start inside this window given the current clock, or `None`
    /// when the visit cannot finish before the window closes.
    ///
    /// The comparison is done in i64 so an extreme duration reports
    /// infeasible instead of overflowing.
    pub fn admits(&self, current: Minutes, duration: i32) -> Option<Minutes> {
        let begin = self.start.max(current);
        if i64::from(begin.value()) + i64::from(duration) <= i64::from(self.end.value()) {
            Some(begin)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
struct UncheckedWindow {
    start: Minutes,
    end: Minutes,
}

impl TryFrom<UncheckedWindow> for Window {
    type Error = ValidationError;

    fn try_from(raw: UncheckedWindow) -> Result<Self, Self::Error> {
        Window::new(raw.start, raw.end)
    }
}

/// One candidate inspection stop.
///
/// Deserialization funnels through [`Visit::new`], so wire input cannot
/// bypass name validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedVisit")]
pub struct Visit {
    /// Display label; not used in scheduling logic.
    pub name: String,
    /// Carried through unchanged; not used in scheduling logic.
    pub location: Location,
    pub window: Window,
    /// Integer rank, lower = more important. Stored and reported but not
    /// consulted by enumeration or ranking; ranking is by chain length only.
    pub priority: i32,
}

impl Visit {
    /// Build a validated visit record.
    pub fn new(
        name: impl Into<String>,
        location: Location,
        window: Window,
        priority: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            location,
            window,
            priority,
        })
    }

    /// Build a visit record from raw string fields, as produced by any
    /// ingestion source (CSV row, form submission).
    ///
    /// Nothing is silently defaulted: an empty or malformed time, a
    /// non-numeric priority, or an inverted window rejects the whole record.
    pub fn from_fields(
        name: &str,
        address: &str,
        coordinate: &str,
        start: &str,
        end: &str,
        priority: &str,
    ) -> Result<Self, ValidationError> {
        if start.trim().is_empty() {
            return Err(ValidationError::MissingField("start"));
        }
        if end.trim().is_empty() {
            return Err(ValidationError::MissingField("end"));
        }
        let window = Window::new(Minutes::parse("start", start)?, Minutes::parse("end", end)?)?;
        let priority = if priority.trim().is_empty() {
            DEFAULT_PRIORITY
        } else {
            priority
                .trim()
                .parse::<i32>()
                .map_err(|_| ParseError::Number {
                    field: "priority",
                    value: priority.to_string(),
                })?
        };
        Visit::new(name, Location::new(address, coordinate), window, priority)
    }
}

#[derive(Deserialize)]
struct UncheckedVisit {
    name: String,
    location: Location,
    window: Window,
    priority: i32,
}

impl TryFrom<UncheckedVisit> for Visit {
    type Error = ValidationError;

    fn try_from(raw: UncheckedVisit) -> Result<Self, Self::Error> {
        Visit::new(raw.name, raw.location, raw.window, raw.priority)
    }
}
