use parking_client::{ApiEvent, ApiRequest, ControllerConfig, CoreActions, SpotGridCore};
use parking_core::{
    messages::spots::SpotsSnapshot,
    types::{Promotion, Spot, SpotStatus},
};

pub fn small_config() -> ControllerConfig {
    ControllerConfig {
        spot_ids: ["A1", "A2", "A3", "B1"].iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// An initialized core whose first read has already come back.
pub fn ready_core() -> SpotGridCore {
    let mut core = SpotGridCore::new(small_config());
    core.initialize();
    core.handle_api_event(ApiEvent::SpotsFetched(Ok(SpotsSnapshot::default())));
    core
}

pub fn snapshot(spots: &[(&str, SpotStatus)]) -> SpotsSnapshot {
    SpotsSnapshot {
        spots: spots
            .iter()
            .map(|(id, status)| Spot {
                id: id.to_string(),
                status: *status,
            })
            .collect(),
        active_promotion: None,
    }
}

pub fn weekend_promotion() -> Promotion {
    serde_json::from_value(serde_json::json!({
        "name": "周末特惠",
        "discount": "8折",
        "start_time": "2025-01-01T02:00:00Z",
        "end_time": "2025-01-03T15:30:00Z",
    }))
    .unwrap()
}

pub fn errors(actions: &[CoreActions]) -> Vec<&str> {
    actions
        .iter()
        .filter_map(|a| match a {
            CoreActions::ShowError(msg) => Some(msg.as_str()),
            _ => None,
        })
        .collect()
}

pub fn requests(actions: &[CoreActions]) -> Vec<&ApiRequest> {
    actions
        .iter()
        .filter_map(|a| match a {
            CoreActions::Request(req) => Some(req),
            _ => None,
        })
        .collect()
}
