use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use parking_core::{endpoints::PERSONAL_CENTER, layout::default_spot_ids};

const DEFAULT_UTC_OFFSET_MINUTES: i32 = 8 * 60;
const MIN_REFRESH_INTERVAL_SECS: u64 = 1;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Spots present on the page, in display order.
    pub spot_ids: Vec<String>,
    pub refresh_interval_secs: u64,
    pub error_toast_ms: u64,
    pub redirect_delay_ms: u64,
    pub redirect_path: String,
    /// Offset promotion times are displayed in.
    pub display_utc_offset_minutes: i32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            spot_ids: default_spot_ids(),
            refresh_interval_secs: 60,
            error_toast_ms: 3000,
            redirect_delay_ms: 1500,
            redirect_path: PERSONAL_CENTER.to_string(),
            display_utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl ControllerConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(MIN_REFRESH_INTERVAL_SECS))
    }

    pub fn error_toast(&self) -> Duration {
        Duration::from_millis(self.error_toast_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn display_offset(&self) -> FixedOffset {
        self.display_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                log::warn!(
                    "display offset {} minutes out of range, using UTC",
                    self.display_utc_offset_minutes
                );
                Utc.fix()
            })
    }
}
