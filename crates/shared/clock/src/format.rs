use cfm_core::Seconds;
use chrono::{DateTime, Duration};

/// Render simulated seconds as a UTC timestamp counted from the Unix epoch
pub fn pretty_time(seconds: Seconds) -> String {
    match DateTime::from_timestamp(seconds.trunc() as i64, 0) {
        Some(time) => time.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        None => format!("{}s", seconds),
    }
}

/// Render an interval as `DD:HH:MM:SS`, fractional seconds dropped
pub fn pretty_delta(seconds: Seconds) -> String {
    let delta = Duration::seconds(seconds.trunc() as i64);
    let sign = if delta < Duration::zero() { "-" } else { "" };
    let delta = delta.abs();

    format!(
        "{}{:02}:{:02}:{:02}:{:02}",
        sign,
        delta.num_days(),
        delta.num_hours() % 24,
        delta.num_minutes() % 60,
        delta.num_seconds() % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_time_epoch() {
        assert_eq!(pretty_time(0.0), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_pretty_time_one_year() {
        assert_eq!(pretty_time(365.0 * 86_400.0), "1971-01-01T00:00:00Z");
        assert_eq!(pretty_time(3661.9), "1970-01-01T01:01:01Z");
    }

    #[test]
    fn test_pretty_delta() {
        assert_eq!(pretty_delta(300.3), "00:00:05:00");
        assert_eq!(pretty_delta(90_061.0), "01:01:01:01");
        assert_eq!(pretty_delta(0.0), "00:00:00:00");
    }

    #[test]
    fn test_pretty_delta_many_days() {
        assert_eq!(pretty_delta(365.0 * 86_400.0), "365:00:00:00");
    }

    #[test]
    fn test_pretty_delta_negative() {
        assert_eq!(pretty_delta(-61.0), "-00:00:01:01");
    }
}
