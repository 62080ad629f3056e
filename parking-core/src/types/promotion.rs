use chrono::{DateTime, FixedOffset};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Promotion {
    pub name: String,
    pub discount: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

/// Two display lines of the promotion banner.
#[derive(Clone, Debug, PartialEq)]
pub struct PromotionBanner {
    pub headline: String,
    pub period: String,
}

impl Promotion {
    pub fn is_displayable(&self) -> bool {
        !self.name.is_empty()
    }

    /// Renders the banner with times shown in `display_offset`.
    pub fn banner(&self, display_offset: FixedOffset) -> PromotionBanner {
        PromotionBanner {
            headline: format!("当前促销活动: {} - {}", self.name, self.discount),
            period: format!(
                "活动时间: {} 至 {}",
                format_banner_time(&self.start_time, display_offset),
                format_banner_time(&self.end_time, display_offset)
            ),
        }
    }
}

pub fn format_banner_time(time: &DateTime<FixedOffset>, display_offset: FixedOffset) -> String {
    time.with_timezone(&display_offset)
        .format("%Y/%m/%d %H:%M")
        .to_string()
}
