use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Compiled regex for the accepted duration shape: one or two hour digits,
// then exactly two digits each for minutes and seconds.
static TIME_FORMAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})$").unwrap());

// Custom error type for pace computation
#[derive(Debug)]
pub enum PaceError {
    BadTimeFormat,
}

impl fmt::Display for PaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaceError::BadTimeFormat => write!(f, "Please enter time in format hh:mm:ss"),
        }
    }
}

impl std::error::Error for PaceError {}

/// An elapsed running time split into its clock fields.
///
/// Only the textual shape is checked when parsing; fields are not
/// range-limited, so `"99:99:99"` is a valid duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeDuration {
    /// Total elapsed seconds across all three fields.
    #[inline]
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// Minutes and seconds needed to cover one kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pace {
    pub minutes: u32,
    pub seconds: u32,
}

impl Pace {
    /// Empty state shown before any calculation and after invalid input.
    pub const ZERO: Pace = Pace {
        minutes: 0,
        seconds: 0,
    };
}

/// Check that `input` has the shape `H:MM:SS` or `HH:MM:SS`.
///
/// This is a syntactic check only; minute and second values above 59
/// still pass.
pub fn validate_time_format(input: &str) -> bool {
    TIME_FORMAT_REGEX.is_match(input)
}

/// Parse a duration string into its hour, minute and second fields.
pub fn parse_duration(time_text: &str) -> Result<TimeDuration, PaceError> {
    let captures = TIME_FORMAT_REGEX
        .captures(time_text)
        .ok_or(PaceError::BadTimeFormat)?;

    let hours = captures[1].parse().map_err(|_| PaceError::BadTimeFormat)?;
    let minutes = captures[2].parse().map_err(|_| PaceError::BadTimeFormat)?;
    let seconds = captures[3].parse().map_err(|_| PaceError::BadTimeFormat)?;

    Ok(TimeDuration {
        hours,
        minutes,
        seconds,
    })
}

/// Parse the distance field as kilometers.
///
/// Unparsable input becomes NaN so the positivity check in
/// [`compute_pace`] rejects it without a separate error path.
pub fn parse_distance(distance_text: &str) -> f64 {
    distance_text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Compute the pace per kilometer from the raw form fields.
///
/// A malformed time string is the only error. A non-positive duration,
/// or a non-positive or unparsable distance, resets the result to
/// [`Pace::ZERO`] instead of failing.
pub fn compute_pace(distance_text: &str, time_text: &str) -> Result<Pace, PaceError> {
    let duration = parse_duration(time_text)?;
    let total_seconds = duration.total_seconds();
    let distance_km = parse_distance(distance_text);

    if total_seconds > 0 && distance_km > 0.0 {
        let pace_seconds = f64::from(total_seconds) / distance_km;
        let minutes = (pace_seconds / 60.0).floor() as u32;
        // Rounding the remainder can yield 60; the formatter prints it verbatim
        let seconds = (pace_seconds % 60.0).round() as u32;

        debug!(
            "{} s over {} km -> {}:{:02} min/km",
            total_seconds, distance_km, minutes, seconds
        );

        Ok(Pace { minutes, seconds })
    } else {
        debug!(
            "Non-positive duration ({} s) or distance ({} km), resetting pace",
            total_seconds, distance_km
        );

        Ok(Pace::ZERO)
    }
}

/// Format a pace as `M:SS/km`.
///
/// Seconds are zero-padded to two digits; minutes are printed as-is.
pub fn format_pace(pace: Pace) -> String {
    format!("{}:{:02}/km", pace.minutes, pace.seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_or_two_digit_hours() {
        assert!(validate_time_format("12:30:00"));
        assert!(validate_time_format("1:30:00"));
    }

    #[test]
    fn rejects_short_minute_or_second_groups() {
        assert!(!validate_time_format("1:2:03"));
        assert!(!validate_time_format("1:30"));
        assert!(!validate_time_format("123:00:00"));
        assert!(!validate_time_format("01:30:00 "));
        assert!(!validate_time_format(""));
    }

    #[test]
    fn format_check_is_not_a_range_check() {
        assert!(validate_time_format("99:99:99"));
    }

    #[test]
    fn parses_duration_fields() {
        let duration = parse_duration("01:30:00").unwrap();
        assert_eq!(
            duration,
            TimeDuration {
                hours: 1,
                minutes: 30,
                seconds: 0
            }
        );
        assert_eq!(duration.total_seconds(), 5400);
    }

    #[test]
    fn ninety_minutes_over_ten_km() {
        let pace = compute_pace("10", "01:30:00").unwrap();
        assert_eq!(pace, Pace { minutes: 9, seconds: 0 });
        assert_eq!(format_pace(pace), "9:00/km");
    }

    #[test]
    fn fractional_distance_is_accepted() {
        // 1200 s over 2.5 km is 480 s/km
        let pace = compute_pace("2.5", "00:20:00").unwrap();
        assert_eq!(pace, Pace { minutes: 8, seconds: 0 });
    }

    #[test]
    fn zero_distance_resets_to_zero_pace() {
        assert_eq!(compute_pace("0", "01:30:00").unwrap(), Pace::ZERO);
    }

    #[test]
    fn negative_distance_resets_to_zero_pace() {
        assert_eq!(compute_pace("-5", "01:00:00").unwrap(), Pace::ZERO);
    }

    #[test]
    fn zero_duration_resets_to_zero_pace() {
        assert_eq!(compute_pace("5", "00:00:00").unwrap(), Pace::ZERO);
    }

    #[test]
    fn unparsable_distance_resets_to_zero_pace() {
        assert_eq!(compute_pace("abc", "01:00:00").unwrap(), Pace::ZERO);
        assert_eq!(format_pace(Pace::ZERO), "0:00/km");
    }

    #[test]
    fn malformed_time_is_an_error() {
        assert!(matches!(
            compute_pace("10", "1:3:5"),
            Err(PaceError::BadTimeFormat)
        ));
    }

    #[test]
    fn remainder_can_round_up_to_sixty() {
        // 2998 s over 5 km is 599.6 s/km: 9 whole minutes, remainder 59.6
        let pace = compute_pace("5", "00:49:58").unwrap();
        assert_eq!(pace, Pace { minutes: 9, seconds: 60 });
        assert_eq!(format_pace(pace), "9:60/km");
    }

    #[test]
    fn minutes_are_not_zero_padded() {
        assert_eq!(format_pace(Pace { minutes: 12, seconds: 5 }), "12:05/km");
        assert_eq!(format_pace(Pace { minutes: 0, seconds: 99 }), "0:99/km");
    }
}
