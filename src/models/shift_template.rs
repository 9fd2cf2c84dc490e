//! Shift template model.
//!
//! A shift template holds the four expected punch times of a split workday
//! (morning block and afternoon block). An all-unset template marks a
//! non-working day such as a weekend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

use super::ClockTime;

/// The four expected punch times defining a workday.
///
/// A split workday has two blocks: entry1-exit1 in the morning and
/// entry2-exit2 in the afternoon. A template with all four times unset is
/// the non-working-day sentinel.
///
/// Templates have a four-token string form matching the storage layer's
/// column format, e.g. `"07:12 10:30 12:00 17:30"` for the standard day and
/// `"--:-- --:-- --:-- --:--"` for a day off.
///
/// # Example
///
/// ```
/// use ponto_engine::models::ShiftTemplate;
///
/// let template: ShiftTemplate = "07:12 10:30 12:00 17:30".parse().unwrap();
/// assert!(template.is_working_day());
/// assert_eq!(template.baseline_minutes(), Some(528)); // 8h48
/// assert!(!ShiftTemplate::off().is_working_day());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftTemplate {
    /// Expected first entry (start of the morning block).
    pub entry1: ClockTime,
    /// Expected first exit (start of the break).
    pub exit1: ClockTime,
    /// Expected second entry (return from the break).
    pub entry2: ClockTime,
    /// Expected final exit (end of the afternoon block).
    pub exit2: ClockTime,
}

impl ShiftTemplate {
    /// Creates a template from its four expected times.
    pub fn new(entry1: ClockTime, exit1: ClockTime, entry2: ClockTime, exit2: ClockTime) -> Self {
        Self {
            entry1,
            exit1,
            entry2,
            exit2,
        }
    }

    /// Returns the non-working-day sentinel (all four times unset).
    pub fn off() -> Self {
        Self::default()
    }

    /// Returns true when at least one expected time is set.
    ///
    /// An all-unset template is a day off: derived durations and exceptions
    /// are always zero/empty for such a day, regardless of recorded punches.
    pub fn is_working_day(&self) -> bool {
        self.entry1.is_set() || self.exit1.is_set() || self.entry2.is_set() || self.exit2.is_set()
    }

    /// Returns the expected worked minutes for a full day under this
    /// template, or `None` when the template is incomplete.
    ///
    /// The baseline is the entry1-to-exit2 span minus the midday break,
    /// computed as the sum of the two block durations. It is derived from
    /// the template itself rather than fixed, since templates vary. A
    /// template whose blocks sum to a negative value has no usable
    /// baseline.
    pub fn baseline_minutes(&self) -> Option<i64> {
        let entry1 = self.entry1.minute_of_day()?;
        let exit1 = self.exit1.minute_of_day()?;
        let entry2 = self.entry2.minute_of_day()?;
        let exit2 = self.exit2.minute_of_day()?;

        let baseline = (exit1 - entry1) + (exit2 - entry2);
        if baseline >= 0 { Some(baseline) } else { None }
    }
}

impl fmt::Display for ShiftTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.entry1, self.exit1, self.entry2, self.exit2
        )
    }
}

impl FromStr for ShiftTemplate {
    type Err = EngineError;

    /// Parses the four-token string form.
    ///
    /// The token count is structural and must be exactly four; each token
    /// is then parsed leniently, so a malformed time inside an otherwise
    /// well-shaped template degrades to unset rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(EngineError::InvalidTemplate {
                value: s.to_string(),
                message: format!("expected four times, found {}", tokens.len()),
            });
        }
        Ok(Self::new(
            ClockTime::parse(tokens[0]),
            ClockTime::parse(tokens[1]),
            ClockTime::parse(tokens[2]),
            ClockTime::parse(tokens[3]),
        ))
    }
}

impl Serialize for ShiftTemplate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShiftTemplate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> ShiftTemplate {
        "07:12 10:30 12:00 17:30".parse().unwrap()
    }

    #[test]
    fn test_parse_standard_template() {
        let template = standard();
        assert_eq!(template.entry1, ClockTime::parse("07:12"));
        assert_eq!(template.exit1, ClockTime::parse("10:30"));
        assert_eq!(template.entry2, ClockTime::parse("12:00"));
        assert_eq!(template.exit2, ClockTime::parse("17:30"));
    }

    #[test]
    fn test_parse_off_template() {
        let template: ShiftTemplate = "--:-- --:-- --:-- --:--".parse().unwrap();
        assert_eq!(template, ShiftTemplate::off());
        assert!(!template.is_working_day());
    }

    #[test]
    fn test_parse_wrong_token_count_is_error() {
        for s in ["", "07:12", "07:12 10:30 12:00", "07:12 10:30 12:00 17:30 18:00"] {
            let result = s.parse::<ShiftTemplate>();
            assert!(result.is_err(), "input: {:?}", s);
        }
    }

    #[test]
    fn test_parse_malformed_token_degrades_to_unset() {
        let template: ShiftTemplate = "07:12 nonsense 12:00 17:30".parse().unwrap();
        assert!(template.entry1.is_set());
        assert_eq!(template.exit1, ClockTime::Unset);
        assert!(template.is_working_day());
    }

    /// Baseline for the standard template is 8h48: (10:30-07:12) + (17:30-12:00).
    #[test]
    fn test_baseline_standard_template() {
        assert_eq!(standard().baseline_minutes(), Some(528));
    }

    #[test]
    fn test_baseline_varies_with_template() {
        let template: ShiftTemplate = "08:00 12:00 13:00 17:00".parse().unwrap();
        assert_eq!(template.baseline_minutes(), Some(480));
    }

    #[test]
    fn test_baseline_missing_when_incomplete() {
        let template: ShiftTemplate = "07:12 --:-- 12:00 17:30".parse().unwrap();
        assert_eq!(template.baseline_minutes(), None);
        assert_eq!(ShiftTemplate::off().baseline_minutes(), None);
    }

    #[test]
    fn test_baseline_missing_when_negative() {
        // Exit before entry on both blocks: garbage template, no baseline.
        let template: ShiftTemplate = "10:30 07:12 17:30 12:00".parse().unwrap();
        assert_eq!(template.baseline_minutes(), None);
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["07:12 10:30 12:00 17:30", "--:-- --:-- --:-- --:--"] {
            assert_eq!(s.parse::<ShiftTemplate>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&standard()).unwrap();
        assert_eq!(json, "\"07:12 10:30 12:00 17:30\"");

        let parsed: ShiftTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, standard());
    }

    #[test]
    fn test_deserialize_wrong_shape_is_error() {
        let result: Result<ShiftTemplate, _> = serde_json::from_str("\"07:12 10:30\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_template_is_working_day() {
        let template: ShiftTemplate = "07:12 --:-- --:-- --:--".parse().unwrap();
        assert!(template.is_working_day());
    }
}
