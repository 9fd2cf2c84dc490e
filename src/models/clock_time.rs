//! Clock time value type.
//!
//! This module defines [`ClockTime`], a minute-granularity time-of-day that
//! is either set or carries an explicit "unset" sentinel. Malformed input
//! degrades to unset rather than raising an error, so a half-filled time
//! clock row never aborts a calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The string marker used for an unset clock time (`--:--`).
pub const UNSET_MARKER: &str = "--:--";

/// A time-of-day punch value at minute granularity.
///
/// A `ClockTime` is either `Unset` (no punch recorded, rendered as `--:--`)
/// or a set hour/minute pair. The unset sentinel is distinct from midnight:
/// `00:00` is a valid punch, `--:--` is the absence of one.
///
/// Parsing is strict about the format (`HH:MM`, zero-padded two-digit hour
/// in 00-23 and minute in 00-59) but lenient about failure: any string that
/// does not match, including the empty string, parses to `Unset`.
///
/// # Example
///
/// ```
/// use ponto_engine::models::ClockTime;
///
/// assert_eq!(ClockTime::parse("07:12"), ClockTime::from_hm(7, 12).unwrap());
/// assert_eq!(ClockTime::parse("--:--"), ClockTime::Unset);
/// assert_eq!(ClockTime::parse("7:12"), ClockTime::Unset);   // missing leading zero
/// assert_eq!(ClockTime::parse("24:00"), ClockTime::Unset);  // out of range
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClockTime {
    /// No punch recorded.
    #[default]
    Unset,
    /// A recorded punch at the given hour and minute.
    At {
        /// Hour of day, 0-23.
        hour: u8,
        /// Minute of hour, 0-59.
        minute: u8,
    },
}

impl ClockTime {
    /// Creates a clock time from an hour and minute pair.
    ///
    /// Returns `None` when either component is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use ponto_engine::models::ClockTime;
    ///
    /// assert!(ClockTime::from_hm(17, 30).is_some());
    /// assert!(ClockTime::from_hm(24, 0).is_none());
    /// assert!(ClockTime::from_hm(12, 60).is_none());
    /// ```
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(ClockTime::At { hour, minute })
        } else {
            None
        }
    }

    /// Parses a clock time string, degrading to `Unset` on any mismatch.
    ///
    /// Accepts exactly `HH:MM` (two-digit zero-padded hour 00-23, minute
    /// 00-59) or the unset marker `--:--`. Everything else, including the
    /// empty string and single-digit hours, is treated as missing data.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == UNSET_MARKER {
            return ClockTime::Unset;
        }
        if !Self::is_well_formed(s) {
            return ClockTime::Unset;
        }
        let hour = s[0..2].parse::<u8>().unwrap_or(u8::MAX);
        let minute = s[3..5].parse::<u8>().unwrap_or(u8::MAX);
        Self::from_hm(hour, minute).unwrap_or(ClockTime::Unset)
    }

    /// Reports whether a string is a valid clock time representation.
    ///
    /// True for strict `HH:MM` in range or for the unset marker; false for
    /// anything else. Callers that need a punch value should use
    /// [`ClockTime::parse`], which maps invalid input to `Unset` instead.
    pub fn is_valid(s: &str) -> bool {
        let s = s.trim();
        s == UNSET_MARKER || Self::parse(s).is_set()
    }

    fn is_well_formed(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 5
            && bytes[2] == b':'
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit()
    }

    /// Returns true when a punch is recorded.
    pub fn is_set(&self) -> bool {
        matches!(self, ClockTime::At { .. })
    }

    /// Returns the minute offset from midnight, or `None` when unset.
    ///
    /// # Example
    ///
    /// ```
    /// use ponto_engine::models::ClockTime;
    ///
    /// assert_eq!(ClockTime::parse("07:12").minute_of_day(), Some(432));
    /// assert_eq!(ClockTime::Unset.minute_of_day(), None);
    /// ```
    pub fn minute_of_day(&self) -> Option<i64> {
        match self {
            ClockTime::Unset => None,
            ClockTime::At { hour, minute } => Some(i64::from(*hour) * 60 + i64::from(*minute)),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockTime::Unset => f.write_str(UNSET_MARKER),
            ClockTime::At { hour, minute } => write!(f, "{:02}:{:02}", hour, minute),
        }
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ClockTime::parse(&s))
    }
}
