use std::time::Duration;

use parking_core::types::{PromotionBanner, SpotCell};

use crate::{
    controller::core::SpotGridCore,
    interface::{ApiRequest, Prompt, TimerId},
};

/// Side effects requested by the core, executed by the driver in order.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreActions {
    BindSpots(Vec<String>),
    RenderSpots(Vec<SpotCell>),
    ShowPromotion(PromotionBanner),
    HidePromotion,
    ShowError(String),
    HideError,
    SetLoading(bool),
    Prompt(Prompt),
    ShowTimePicker,
    HideTimePicker,
    Alert(String),
    Navigate(String),
    Request(ApiRequest),
    AddTimeout(TimerId, Duration),
    RemoveTimeout(TimerId),
}

impl SpotGridCore {
    pub(crate) fn bind_spots(&mut self) {
        self.queued_actions
            .push_back(CoreActions::BindSpots(self.config.spot_ids.clone()));
    }

    pub(crate) fn request(&mut self, request: ApiRequest) {
        log::info!("[REQ] {:?}", request);
        self.queued_actions.push_back(CoreActions::Request(request));
    }

    pub(crate) fn prompt(&mut self, prompt: Prompt) {
        self.queued_actions.push_back(CoreActions::Prompt(prompt));
    }

    pub(crate) fn show_time_picker(&mut self) {
        self.queued_actions.push_back(CoreActions::ShowTimePicker);
    }

    pub(crate) fn hide_time_picker(&mut self) {
        self.queued_actions.push_back(CoreActions::HideTimePicker);
    }

    pub(crate) fn alert(&mut self, message: &str) {
        self.queued_actions
            .push_back(CoreActions::Alert(message.to_string()));
    }

    pub(crate) fn navigate(&mut self, path: String) {
        self.queued_actions.push_back(CoreActions::Navigate(path));
    }

    pub(crate) fn add_timeout(&mut self, timer_id: TimerId, after: Duration) {
        self.queued_actions
            .push_back(CoreActions::AddTimeout(timer_id, after));
    }

    pub(crate) fn remove_timeout(&mut self, timer_id: TimerId) {
        self.queued_actions
            .push_back(CoreActions::RemoveTimeout(timer_id));
    }
}
