use std::{
    task::{Context, Poll},
    time::Duration,
};

use parking_core::{
    format::error::RequestError,
    messages::{
        entry::EntryRequest, reply::ApiReply, reserve_spot::ReserveSpotRequest,
        spots::SpotsSnapshot, validate_license_plate::ValidateLicensePlateRequest,
    },
    types::{PromotionBanner, SpotCell},
};

use crate::state_machine::workflow::WorkflowKind;

// api

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkflowId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchSpots,
    ValidateLicensePlate {
        workflow: WorkflowId,
        request: ValidateLicensePlateRequest,
    },
    ReserveSpot {
        workflow: WorkflowId,
        request: ReserveSpotRequest,
    },
    Entry {
        workflow: WorkflowId,
        request: EntryRequest,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    SpotsFetched(Result<SpotsSnapshot, RequestError>),
    LicensePlateValidated {
        workflow: WorkflowId,
        result: Result<ApiReply, RequestError>,
    },
    SpotReserved {
        workflow: WorkflowId,
        result: Result<ApiReply, RequestError>,
    },
    VehicleEntered {
        workflow: WorkflowId,
        result: Result<ApiReply, RequestError>,
    },
}

/// HTTP side of the controller. A non-2xx status must come back as
/// `RequestError::Status`, whatever the body says.
#[allow(async_fn_in_trait)]
pub trait SpotApi {
    async fn fetch_spots(&self) -> Result<SpotsSnapshot, RequestError>;
    async fn validate_license_plate(
        &self,
        request: &ValidateLicensePlateRequest,
    ) -> Result<ApiReply, RequestError>;
    async fn reserve_spot(&self, request: &ReserveSpotRequest) -> Result<ApiReply, RequestError>;
    async fn enter_vehicle(&self, request: &EntryRequest) -> Result<ApiReply, RequestError>;
}

// view

#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    ChooseAction {
        spot_number: String,
    },
    EnterLicensePlate {
        spot_number: String,
        kind: WorkflowKind,
    },
    ChooseVehicleType,
}

impl Prompt {
    pub fn message(&self) -> String {
        match self {
            Prompt::ChooseAction { .. } => {
                "请选择操作：\n1. 预订车位\n2. 使用车位\n\n输入 1 或 2：".to_string()
            }
            Prompt::EnterLicensePlate { spot_number, kind } => {
                let verb = match kind {
                    WorkflowKind::Reserve => "预订",
                    WorkflowKind::Park => "停入",
                };
                format!("请输入车牌号以{}车位 {}:\n例如：京A12345", verb, spot_number)
            }
            Prompt::ChooseVehicleType => {
                "请选择车辆类型：\n1. 小型汽车\n2. 货车\n3. 新能源车\n\n输入 1、2 或 3：".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SpotClicked(String),
    /// Answer to the last prompt, `None` when the user dismissed it.
    PromptAnswered(Option<String>),
    ReservationTimeSubmitted(String),
    ReservationTimeCancelled,
}

pub trait SpotView {
    fn bind_spots(&mut self, spot_ids: &[String]);
    fn render_spots(&mut self, cells: &[SpotCell]);
    fn show_promotion(&mut self, banner: &PromotionBanner);
    fn hide_promotion(&mut self);
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);
    fn set_loading(&mut self, visible: bool);
    fn prompt(&mut self, prompt: &Prompt);
    fn show_time_picker(&mut self);
    fn hide_time_picker(&mut self);
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, path: &str);
    fn poll_ui_event(&mut self, cx: &mut Context<'_>) -> Poll<UiEvent>;
}

// time

#[derive(Eq, Hash, Clone, Copy, PartialEq, PartialOrd, Ord, Debug)]
pub enum TimerId {
    Refresh,
    ErrorToast,
    Redirect,
}

pub trait TimeoutScheduler {
    fn add_or_update_timeout(&mut self, id: TimerId, after: Duration);
    fn remove_timeout(&mut self, id: TimerId);
    fn remove_all_timeouts(&mut self);
    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId>;
}
