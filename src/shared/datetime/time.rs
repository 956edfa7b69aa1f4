use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Utility for resolving raw timestamp inputs to UTC instants.
pub struct TimeParser;

impl TimeParser {
    /// Epoch magnitudes below this are treated as seconds, at or above as
    /// milliseconds. A magnitude guess, not a format marker; preserved
    /// exactly for compatibility with existing exports.
    const EPOCH_MILLIS_THRESHOLD: f64 = 1e11;

    /// Resolve a numeric timestamp.
    /// Magnitude `< 1e11` is epoch seconds, anything larger epoch millis.
    pub fn resolve_numeric(value: f64) -> Result<DateTime<Utc>, String> {
        if !value.is_finite() {
            return Err("invalid numeric timestamp".to_string());
        }
        let millis = if value.abs() < Self::EPOCH_MILLIS_THRESHOLD {
            value * 1000.0
        } else {
            value
        };
        Self::from_epoch_millis(millis).ok_or_else(|| "invalid numeric timestamp".to_string())
    }

    /// Resolve a textual timestamp.
    ///
    /// A trimmed string that parses as a finite number is treated as an
    /// epoch value: exactly 10 characters means seconds (the usual epoch
    /// length until 2286), anything else milliseconds. Otherwise the string
    /// goes through the calendar formats.
    pub fn resolve_text(value: &str) -> Result<DateTime<Utc>, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("timestamp is required".to_string());
        }

        if let Ok(numeric) = trimmed.parse::<f64>() {
            if numeric.is_finite() {
                let millis = if trimmed.len() == 10 {
                    numeric * 1000.0
                } else {
                    numeric
                };
                if let Some(instant) = Self::from_epoch_millis(millis) {
                    return Ok(instant);
                }
            }
        }

        Self::parse_calendar(trimmed)
            .ok_or_else(|| format!("unable to parse timestamp: {value}"))
    }

    /// Calendar/time-string parse: RFC3339 first, then the common naive
    /// datetime shapes (interpreted as UTC), then date-only.
    fn parse_calendar(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }

        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Utc.from_utc_datetime(&naive));
            }
        }

        for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
            }
        }

        None
    }

    fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return None;
        }
        Utc.timestamp_millis_opt(millis as i64).single()
    }
}
