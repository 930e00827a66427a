//! Clock and travel-time utilities.
//!
//! Converts between "HH:MM" clock strings and minute offsets from a
//! reference midnight, and computes running times over a section.
//!
//! # Time Model
//! Minute offsets are `f64` and unbounded: an arrival at 1450.0 is ten
//! minutes past the next midnight. Only formatting wraps to 24 hours.

use crate::error::ClockError;

/// Minutes in one operating day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Parses an "HH:MM" clock string into minutes since midnight.
///
/// The result is `hours * 60 + minutes`. Parts are not bounded to a 24h
/// clock, so "25:10" parses to 1510.
///
/// # Errors
/// Returns [`ClockError`] if the text does not split into exactly two
/// colon-separated parts, if either part is not an integer, or if the
/// minute total does not fit in an `i64`.
///
/// # Example
/// ```
/// use u_single_track::time::parse_clock;
/// assert_eq!(parse_clock("10:22").unwrap(), 622);
/// assert!(parse_clock("10-22").is_err());
/// ```
pub fn parse_clock(text: &str) -> Result<i64, ClockError> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 {
        return Err(ClockError::PartCount {
            input: text.to_string(),
            found: parts.len(),
        });
    }

    let hours = parse_part(text, parts[0])?;
    let minutes = parse_part(text, parts[1])?;
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| ClockError::OutOfRange {
            input: text.to_string(),
        })
}

fn parse_part(input: &str, part: &str) -> Result<i64, ClockError> {
    part.trim()
        .parse::<i64>()
        .map_err(|_| ClockError::NotAnInteger {
            input: input.to_string(),
            part: part.to_string(),
        })
}

/// Formats a minute offset as "HH:MM".
///
/// Fractional minutes are rounded to the nearest minute first, halves to
/// even (646.5 → 646). Hours wrap modulo 24; negative offsets wrap
/// backwards (-1 → "23:59").
pub fn format_clock(minutes: f64) -> String {
    let total = minutes.round_ties_even() as i64;
    let hours = total.div_euclid(60).rem_euclid(24);
    let mins = total.rem_euclid(60);
    format!("{hours:02}:{mins:02}")
}

/// Running time over a section in minutes: `60 * distance / speed`.
///
/// Speed must be validated as positive by the caller; a zero speed yields
/// an infinite result.
#[inline]
pub fn travel_time_minutes(distance_km: f64, speed_kmph: f64) -> f64 {
    60.0 * distance_km / speed_kmph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("00:00").unwrap(), 0);
        assert_eq!(parse_clock("10:00").unwrap(), 600);
        assert_eq!(parse_clock("10:22").unwrap(), 622);
        assert_eq!(parse_clock("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_parse_clock_unbounded() {
        assert_eq!(parse_clock("25:10").unwrap(), 1510);
        assert_eq!(parse_clock("9:5").unwrap(), 545);
        assert_eq!(parse_clock(" 9: 05 ").unwrap(), 545);
    }

    #[test]
    fn test_parse_clock_part_count() {
        assert!(matches!(
            parse_clock("1022"),
            Err(ClockError::PartCount { found: 1, .. })
        ));
        assert!(matches!(
            parse_clock("10:22:00"),
            Err(ClockError::PartCount { found: 3, .. })
        ));
    }

    #[test]
    fn test_parse_clock_not_integer() {
        let err = parse_clock("ten:22").unwrap_err();
        assert!(matches!(err, ClockError::NotAnInteger { ref part, .. } if part == "ten"));
        assert!(parse_clock("10:2.5").is_err());
        assert!(parse_clock(":30").is_err());
    }

    #[test]
    fn test_parse_clock_overflow() {
        assert!(matches!(
            parse_clock("999999999999999999:00"),
            Err(ClockError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_clock(&format!("0:{}", i64::MAX)),
            Ok(m) if m == i64::MAX
        ));
        assert!(matches!(
            parse_clock(&format!("1:{}", i64::MAX)),
            Err(ClockError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(622.0), "10:22");
        assert_eq!(format_clock(1439.0), "23:59");
    }

    #[test]
    fn test_format_clock_rounds() {
        // 643.82 rounds up, truncation would give 10:43
        assert_eq!(format_clock(643.82), "10:44");
        assert_eq!(format_clock(646.4), "10:46");
        assert_eq!(format_clock(59.6), "01:00");
    }

    #[test]
    fn test_format_clock_halves_round_to_even() {
        assert_eq!(format_clock(646.5), "10:46");
        assert_eq!(format_clock(647.5), "10:48");
        assert_eq!(format_clock(0.5), "00:00");
        assert_eq!(format_clock(1.5), "00:02");
    }

    #[test]
    fn test_format_clock_wraps() {
        assert_eq!(format_clock(1440.0), "00:00");
        assert_eq!(format_clock(1510.0), "01:10");
        assert_eq!(format_clock(-1.0), "23:59");
    }

    #[test]
    fn test_clock_round_trip() {
        for m in 0..1440 {
            assert_eq!(parse_clock(&format_clock(m as f64)).unwrap(), m);
        }
    }

    #[test]
    fn test_travel_time() {
        assert!((travel_time_minutes(40.0, 40.0) - 60.0).abs() < 1e-10);
        assert!((travel_time_minutes(40.0, 110.0) - 21.818_181_818).abs() < 1e-6);
        assert!(travel_time_minutes(40.0, 0.0).is_infinite());
    }
}
