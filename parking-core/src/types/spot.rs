use serde::{Deserialize, Deserializer};

use super::SpotStatus;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Spot {
    pub id: String,
    #[serde(default, deserialize_with = "status_or_available")]
    pub status: SpotStatus,
}

// `null` renders as free, same as a missing or unknown status
fn status_or_available<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SpotStatus, D::Error> {
    Ok(Option::<SpotStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// What a single grid cell should display after a refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotCell {
    pub id: String,
    pub status: SpotStatus,
    pub class_name: String,
    pub label: &'static str,
}

impl SpotCell {
    pub fn new(id: &str, status: SpotStatus) -> Self {
        Self {
            id: id.to_string(),
            status,
            class_name: format!("spot {} {} S", id, status),
            label: status.label(),
        }
    }
}
