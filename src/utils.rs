//! Utility functions for the chunmi-cooker crate.

use chrono::{DateTime, Duration, Utc};

/// Convert a duration to whole minutes as stored in a profile.
///
/// Negative durations become 0 and durations beyond `u16::MAX` minutes
/// saturate.
///
/// # Example
///
/// ```
/// use chunmi_cooker::utils::duration_to_minutes;
///
/// assert_eq!(duration_to_minutes(chrono::Duration::seconds(5430)), 90);
/// ```
pub fn duration_to_minutes(duration: Duration) -> u16 {
    duration.num_minutes().clamp(0, u16::MAX as i64) as u16
}

/// Minutes from `now` until `at`, for a delayed start.
///
/// Returns `None` when `at` is less than a minute away or in the past,
/// meaning the cook should start immediately.
pub fn minutes_until(at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u16> {
    match duration_to_minutes(at - now) {
        0 => None,
        minutes => Some(minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration_to_minutes() {
        assert_eq!(duration_to_minutes(Duration::minutes(45)), 45);
        assert_eq!(duration_to_minutes(Duration::seconds(119)), 1);
        assert_eq!(duration_to_minutes(Duration::seconds(-600)), 0);
        assert_eq!(duration_to_minutes(Duration::days(365)), u16::MAX);
    }

    #[test]
    fn test_minutes_until() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 20, 30, 0).unwrap();
        assert_eq!(minutes_until(at, now), Some(150));

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 45).unwrap();
        assert_eq!(minutes_until(at, now), None);

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 17, 0, 0).unwrap();
        assert_eq!(minutes_until(at, now), None);
    }
}
