use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Timezone policy for hour-bucket truncation.
///
/// Truncation is a pure function of the timestamp and this policy; nothing
/// reads ambient process locale state. `None` means UTC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourBucketConfig {
    pub timezone: Option<String>,
}

impl HourBucketConfig {
    pub fn parse_timezone(&self) -> Option<Tz> {
        self.timezone.as_ref().and_then(|tz| tz.parse().ok())
    }
}

/// Truncates instants to textual hour-bucket keys (`YYYY-MM-DD HH:00`).
#[derive(Debug, Clone)]
pub struct HourBucketer {
    tz: Option<Tz>,
}

impl HourBucketer {
    const KEY_FORMAT: &'static str = "%Y-%m-%d %H:00";

    pub fn new(config: &HourBucketConfig) -> Self {
        Self {
            tz: config.parse_timezone(),
        }
    }

    /// UTC truncation, the deterministic default.
    pub fn utc() -> Self {
        Self { tz: None }
    }

    /// Bucket key for the hour containing `ts`, rendered in the policy
    /// timezone's calendar fields.
    pub fn key_for(&self, ts: DateTime<Utc>) -> String {
        match self.tz {
            Some(tz) => ts.with_timezone(&tz).format(Self::KEY_FORMAT).to_string(),
            None => ts.format(Self::KEY_FORMAT).to_string(),
        }
    }
}
