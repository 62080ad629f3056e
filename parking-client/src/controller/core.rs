use std::collections::VecDeque;

use parking_core::types::{Promotion, SpotCell, SpotStatus};

use crate::{
    interface::{ApiEvent, TimerId, UiEvent},
    state_machine::{
        actions::CoreActions,
        workflow::{PendingAction, WorkflowState, WorkflowStep},
    },
};

use super::config::ControllerConfig;

/// The spot grid as a plain state machine: every entry point takes one event
/// and returns the actions the host has to perform. No I/O happens here.
pub struct SpotGridCore {
    pub(crate) config: ControllerConfig,
    pub(crate) queued_actions: VecDeque<CoreActions>,
    pub(crate) grid: Vec<SpotCell>,
    pub(crate) promotion: Option<Promotion>,
    pub(crate) workflow: WorkflowState,
    pub(crate) next_workflow_id: u64,
    pub(crate) loading_requests: usize,
    pub(crate) pending_redirect: Option<String>,
}

impl SpotGridCore {
    pub fn new(config: ControllerConfig) -> Self {
        let grid = config
            .spot_ids
            .iter()
            .map(|id| SpotCell::new(id, SpotStatus::Available))
            .collect();
        Self {
            config,
            queued_actions: VecDeque::new(),
            grid,
            promotion: None,
            workflow: WorkflowState::Idle,
            next_workflow_id: 0,
            loading_requests: 0,
            pending_redirect: None,
        }
    }

    /// Binds the spots, fetches once and starts the periodic refresh.
    /// Meant to be called once.
    pub fn initialize(&mut self) -> Vec<CoreActions> {
        self.bind_spots();
        self.refresh_spots();
        self.schedule_refresh();
        self.queued_actions.drain(..).collect()
    }
    pub fn refresh(&mut self) -> Vec<CoreActions> {
        self.refresh_spots();
        self.queued_actions.drain(..).collect()
    }
    pub fn spot_clicked(&mut self, spot_number: &str) -> Vec<CoreActions> {
        self.workflow_spot_clicked(spot_number);
        self.queued_actions.drain(..).collect()
    }
    pub fn prompt_answered(&mut self, answer: Option<String>) -> Vec<CoreActions> {
        self.workflow_prompt_answered(answer);
        self.queued_actions.drain(..).collect()
    }
    pub fn submit_reservation_time(&mut self, use_time: String) -> Vec<CoreActions> {
        self.workflow_reservation_time_submitted(use_time);
        self.queued_actions.drain(..).collect()
    }
    pub fn cancel_reservation_time(&mut self) -> Vec<CoreActions> {
        self.workflow_reservation_time_cancelled();
        self.queued_actions.drain(..).collect()
    }
    pub fn handle_ui_event(&mut self, event: UiEvent) -> Vec<CoreActions> {
        log::debug!("ui event: {:?}", event);
        match event {
            UiEvent::SpotClicked(spot_number) => self.spot_clicked(&spot_number),
            UiEvent::PromptAnswered(answer) => self.prompt_answered(answer),
            UiEvent::ReservationTimeSubmitted(use_time) => self.submit_reservation_time(use_time),
            UiEvent::ReservationTimeCancelled => self.cancel_reservation_time(),
        }
    }
    pub fn handle_api_event(&mut self, event: ApiEvent) -> Vec<CoreActions> {
        log::info!("[RES] {:?}", event);
        match event {
            ApiEvent::SpotsFetched(result) => self.on_spots_fetched(result),
            ApiEvent::LicensePlateValidated { workflow, result } => {
                self.on_license_plate_validated(workflow, result)
            }
            ApiEvent::SpotReserved { workflow, result } => self.on_spot_reserved(workflow, result),
            ApiEvent::VehicleEntered { workflow, result } => {
                self.on_vehicle_entered(workflow, result)
            }
        }
        self.queued_actions.drain(..).collect()
    }
    pub fn handle_timeout(&mut self, id: TimerId) -> Vec<CoreActions> {
        log::trace!("timeout: {:?}", id);
        match id {
            TimerId::Refresh => self.on_refresh_timeout(),
            TimerId::ErrorToast => self.hide_error(),
            TimerId::Redirect => self.on_redirect_timeout(),
        }
        self.queued_actions.drain(..).collect()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
    /// Cells as last rendered from a successful refresh.
    pub fn grid(&self) -> &[SpotCell] {
        &self.grid
    }
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }
    pub fn workflow_step(&self) -> WorkflowStep {
        self.workflow.step()
    }
    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.workflow.pending_action()
    }
    pub fn is_loading(&self) -> bool {
        self.loading_requests > 0
    }
}
