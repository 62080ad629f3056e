use std::collections::HashMap;

use parking_core::{
    format::error::RequestError,
    messages::spots::SpotsSnapshot,
    types::{SpotCell, SpotStatus},
};

use crate::{
    controller::core::SpotGridCore,
    error::{RequestKind, WorkflowError},
    interface::{ApiRequest, TimerId},
};

use super::actions::CoreActions;

impl SpotGridCore {
    /// Issues a spot read. Overlapping reads are not suppressed, whichever
    /// reply lands last wins.
    pub(crate) fn refresh_spots(&mut self) {
        self.begin_loading();
        self.request(ApiRequest::FetchSpots);
    }

    pub(crate) fn schedule_refresh(&mut self) {
        self.add_timeout(TimerId::Refresh, self.config.refresh_interval());
    }

    pub(crate) fn on_refresh_timeout(&mut self) {
        self.refresh_spots();
        self.schedule_refresh();
    }

    pub(crate) fn on_spots_fetched(&mut self, result: Result<SpotsSnapshot, RequestError>) {
        match result {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                log::error!("refreshing spots failed: {}", e);
                let err = WorkflowError::request(RequestKind::Refresh, e);
                self.show_error(&err.to_string());
            }
        }
        self.end_loading();
    }

    fn apply_snapshot(&mut self, snapshot: SpotsSnapshot) {
        let SpotsSnapshot {
            spots,
            active_promotion,
        } = snapshot;
        let statuses: HashMap<String, SpotStatus> =
            spots.into_iter().map(|s| (s.id, s.status)).collect();
        self.grid = self
            .config
            .spot_ids
            .iter()
            .map(|id| SpotCell::new(id, statuses.get(id).copied().unwrap_or_default()))
            .collect();
        self.queued_actions
            .push_back(CoreActions::RenderSpots(self.grid.clone()));

        self.promotion = active_promotion.filter(|p| p.is_displayable());
        match &self.promotion {
            Some(promotion) => {
                let banner = promotion.banner(self.config.display_offset());
                self.queued_actions
                    .push_back(CoreActions::ShowPromotion(banner));
            }
            None => {
                self.queued_actions.push_back(CoreActions::HidePromotion);
            }
        }
    }
}
