use std::mem;

use parking_core::{
    format::{datetime::is_valid_reservation_time, error::RequestError, half_width::to_half_width},
    messages::{
        entry::EntryRequest, reply::ApiReply, reserve_spot::ReserveSpotRequest,
        validate_license_plate::ValidateLicensePlateRequest,
    },
    types::VehicleType,
};

use crate::{
    controller::core::SpotGridCore,
    error::{RequestKind, WorkflowError},
    interface::{ApiRequest, Prompt, WorkflowId},
};

const RESERVED_ALERT: &str = "预订成功！";
const ENTERED_ALERT: &str = "车辆入场成功！";
const VEHICLE_TYPE_DEFAULTED: &str = "无效的车辆类型，自动选择小型汽车";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    Reserve,
    Park,
}

impl WorkflowKind {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(WorkflowKind::Reserve),
            "2" => Some(WorkflowKind::Park),
            _ => None,
        }
    }
}

/// One click on one spot. Every reply is tagged with the id so that a reply
/// to an abandoned workflow cannot land in a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowSession {
    pub id: WorkflowId,
    pub spot_number: String,
}

/// Inputs collected once plate and vehicle type are known.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub session: WorkflowSession,
    pub kind: WorkflowKind,
    pub license_plate: String,
    pub vehicle_type: VehicleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    Idle,
    ChoosingAction,
    EnteringPlate,
    ValidatingPlate,
    ChoosingVehicleType,
    EnteringTime,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WorkflowState {
    Idle,
    ChoosingAction(WorkflowSession),
    EnteringPlate(WorkflowSession, WorkflowKind),
    ValidatingPlate(WorkflowSession, WorkflowKind, String),
    ChoosingVehicleType(WorkflowSession, WorkflowKind, String),
    EnteringTime(PendingAction),
    Submitting(PendingAction),
}

impl WorkflowState {
    pub(crate) fn step(&self) -> WorkflowStep {
        match self {
            WorkflowState::Idle => WorkflowStep::Idle,
            WorkflowState::ChoosingAction(_) => WorkflowStep::ChoosingAction,
            WorkflowState::EnteringPlate(..) => WorkflowStep::EnteringPlate,
            WorkflowState::ValidatingPlate(..) => WorkflowStep::ValidatingPlate,
            WorkflowState::ChoosingVehicleType(..) => WorkflowStep::ChoosingVehicleType,
            WorkflowState::EnteringTime(_) => WorkflowStep::EnteringTime,
            WorkflowState::Submitting(_) => WorkflowStep::Submitting,
        }
    }

    pub(crate) fn pending_action(&self) -> Option<&PendingAction> {
        match self {
            WorkflowState::EnteringTime(action) | WorkflowState::Submitting(action) => Some(action),
            _ => None,
        }
    }
}

/// Local half of plate validation; the format check itself is the server's.
pub fn validate_license_plate(plate: &str) -> Result<ValidateLicensePlateRequest, WorkflowError> {
    let plate = plate.trim();
    if plate.is_empty() {
        return Err(WorkflowError::EmptyLicensePlate);
    }
    Ok(ValidateLicensePlateRequest {
        license_plate: plate.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleTypeChoice {
    pub vehicle_type: VehicleType,
    /// Set when the answer was not understood and `Car` was picked instead.
    pub defaulted: bool,
}

/// Never fails: an unknown or missing answer falls back to `Car`.
pub fn select_vehicle_type(answer: Option<&str>) -> VehicleTypeChoice {
    let answer = to_half_width(answer.unwrap_or(""));
    match VehicleType::from_choice(answer.trim()) {
        Some(vehicle_type) => VehicleTypeChoice {
            vehicle_type,
            defaulted: false,
        },
        None => VehicleTypeChoice {
            vehicle_type: VehicleType::Car,
            defaulted: true,
        },
    }
}

pub fn check_reservation_time(input: &str) -> Result<(), WorkflowError> {
    if is_valid_reservation_time(input) {
        Ok(())
    } else {
        Err(WorkflowError::InvalidReservationTime)
    }
}

impl SpotGridCore {
    fn take_workflow(&mut self) -> WorkflowState {
        mem::replace(&mut self.workflow, WorkflowState::Idle)
    }

    fn start_session(&mut self, spot_number: &str) -> WorkflowSession {
        self.next_workflow_id += 1;
        WorkflowSession {
            id: WorkflowId(self.next_workflow_id),
            spot_number: spot_number.to_string(),
        }
    }

    pub(crate) fn workflow_spot_clicked(&mut self, spot_number: &str) {
        if !matches!(self.workflow, WorkflowState::Idle) {
            log::debug!(
                "click on {} ignored, workflow busy in {:?}",
                spot_number,
                self.workflow.step()
            );
            return;
        }
        if !self.config.spot_ids.iter().any(|id| id == spot_number) {
            log::warn!("click on unknown spot {}", spot_number);
            return;
        }
        let session = self.start_session(spot_number);
        log::debug!("workflow {:?} started on {}", session.id, spot_number);
        self.prompt(Prompt::ChooseAction {
            spot_number: session.spot_number.clone(),
        });
        self.workflow = WorkflowState::ChoosingAction(session);
    }

    pub(crate) fn workflow_prompt_answered(&mut self, answer: Option<String>) {
        match self.take_workflow() {
            WorkflowState::ChoosingAction(session) => self.on_action_chosen(session, answer),
            WorkflowState::EnteringPlate(session, kind) => {
                self.on_plate_entered(session, kind, answer)
            }
            WorkflowState::ChoosingVehicleType(session, kind, plate) => {
                self.on_vehicle_type_chosen(session, kind, plate, answer.as_deref())
            }
            other => {
                log::warn!("prompt answer ignored in {:?}", other.step());
                self.workflow = other;
            }
        }
    }

    fn on_action_chosen(&mut self, session: WorkflowSession, answer: Option<String>) {
        let answer = to_half_width(answer.as_deref().unwrap_or(""));
        let answer = answer.trim();
        if answer.is_empty() {
            log::debug!("workflow {:?} cancelled at action choice", session.id);
            return;
        }
        match WorkflowKind::from_choice(answer) {
            Some(kind) => self.prompt_plate(session, kind),
            None => self.show_error(&WorkflowError::InvalidActionChoice.to_string()),
        }
    }

    fn prompt_plate(&mut self, session: WorkflowSession, kind: WorkflowKind) {
        self.prompt(Prompt::EnterLicensePlate {
            spot_number: session.spot_number.clone(),
            kind,
        });
        self.workflow = WorkflowState::EnteringPlate(session, kind);
    }

    fn on_plate_entered(
        &mut self,
        session: WorkflowSession,
        kind: WorkflowKind,
        answer: Option<String>,
    ) {
        let plate = match answer {
            Some(plate) if !plate.is_empty() => plate,
            _ => {
                log::debug!("workflow {:?} cancelled at plate entry", session.id);
                return;
            }
        };
        match validate_license_plate(&plate) {
            Ok(request) => {
                let plate = request.license_plate.clone();
                self.request(ApiRequest::ValidateLicensePlate {
                    workflow: session.id,
                    request,
                });
                self.workflow = WorkflowState::ValidatingPlate(session, kind, plate);
            }
            Err(e) => {
                self.show_error(&e.to_string());
                self.prompt_plate(session, kind);
            }
        }
    }

    pub(crate) fn on_license_plate_validated(
        &mut self,
        workflow: WorkflowId,
        result: Result<ApiReply, RequestError>,
    ) {
        match self.take_workflow() {
            WorkflowState::ValidatingPlate(session, kind, plate) if session.id == workflow => {
                match result {
                    Ok(reply) if reply.success => {
                        log::debug!("plate {} accepted", plate);
                        self.prompt(Prompt::ChooseVehicleType);
                        self.workflow = WorkflowState::ChoosingVehicleType(session, kind, plate);
                    }
                    Ok(reply) => {
                        let err = WorkflowError::rejected(RequestKind::ValidateLicensePlate, reply);
                        self.show_error(&err.to_string());
                        self.prompt_plate(session, kind);
                    }
                    Err(e) => {
                        log::error!("plate validation failed: {}", e);
                        let err = WorkflowError::request(RequestKind::ValidateLicensePlate, e);
                        self.show_error(&err.to_string());
                        self.prompt_plate(session, kind);
                    }
                }
            }
            other => {
                log::warn!("stale plate validation for {:?} dropped", workflow);
                self.workflow = other;
            }
        }
    }

    fn on_vehicle_type_chosen(
        &mut self,
        session: WorkflowSession,
        kind: WorkflowKind,
        license_plate: String,
        answer: Option<&str>,
    ) {
        let choice = select_vehicle_type(answer);
        if choice.defaulted {
            self.show_error(VEHICLE_TYPE_DEFAULTED);
        }
        let action = PendingAction {
            session,
            kind,
            license_plate,
            vehicle_type: choice.vehicle_type,
        };
        match kind {
            WorkflowKind::Reserve => {
                self.show_time_picker();
                self.workflow = WorkflowState::EnteringTime(action);
            }
            WorkflowKind::Park => self.submit_entry(action),
        }
    }

    fn submit_entry(&mut self, action: PendingAction) {
        self.begin_loading();
        self.request(ApiRequest::Entry {
            workflow: action.session.id,
            request: EntryRequest {
                license_plate: action.license_plate.clone(),
                spot_number: action.session.spot_number.clone(),
                vehicle_type: action.vehicle_type,
            },
        });
        self.workflow = WorkflowState::Submitting(action);
    }

    pub(crate) fn workflow_reservation_time_submitted(&mut self, use_time: String) {
        match self.take_workflow() {
            WorkflowState::EnteringTime(action) => {
                if let Err(e) = check_reservation_time(&use_time) {
                    self.show_error(&e.to_string());
                    self.workflow = WorkflowState::EnteringTime(action);
                    return;
                }
                self.begin_loading();
                self.request(ApiRequest::ReserveSpot {
                    workflow: action.session.id,
                    request: ReserveSpotRequest {
                        spot_number: action.session.spot_number.clone(),
                        license_plate: action.license_plate.clone(),
                        vehicle_type: action.vehicle_type,
                        reservation_use_time: use_time,
                    },
                });
                self.workflow = WorkflowState::Submitting(action);
            }
            other => {
                log::warn!("reservation time ignored in {:?}", other.step());
                self.workflow = other;
            }
        }
    }

    pub(crate) fn workflow_reservation_time_cancelled(&mut self) {
        match self.take_workflow() {
            WorkflowState::EnteringTime(action) => {
                log::debug!("workflow {:?} cancelled at time entry", action.session.id);
                self.hide_time_picker();
            }
            other => {
                log::debug!("time picker cancel ignored in {:?}", other.step());
                self.workflow = other;
            }
        }
    }

    pub(crate) fn on_spot_reserved(
        &mut self,
        workflow: WorkflowId,
        result: Result<ApiReply, RequestError>,
    ) {
        self.end_loading();
        match self.take_workflow() {
            WorkflowState::Submitting(action)
                if action.session.id == workflow && action.kind == WorkflowKind::Reserve =>
            {
                match result {
                    Ok(reply) if reply.success => {
                        log::info!(
                            "spot {} reserved for {}",
                            action.session.spot_number,
                            action.license_plate
                        );
                        self.hide_time_picker();
                        self.alert(RESERVED_ALERT);
                        self.refresh_spots();
                        self.schedule_redirect(reply.redirect_url);
                    }
                    Ok(reply) => {
                        let err = WorkflowError::rejected(RequestKind::ReserveSpot, reply);
                        self.show_error(&err.to_string());
                        self.workflow = WorkflowState::EnteringTime(action);
                    }
                    Err(e) => {
                        log::error!("reservation failed: {}", e);
                        let err = WorkflowError::request(RequestKind::ReserveSpot, e);
                        self.show_error(&err.to_string());
                        self.workflow = WorkflowState::EnteringTime(action);
                    }
                }
            }
            other => {
                log::warn!("stale reservation reply for {:?} dropped", workflow);
                self.workflow = other;
            }
        }
    }

    pub(crate) fn on_vehicle_entered(
        &mut self,
        workflow: WorkflowId,
        result: Result<ApiReply, RequestError>,
    ) {
        self.end_loading();
        match self.take_workflow() {
            WorkflowState::Submitting(action)
                if action.session.id == workflow && action.kind == WorkflowKind::Park =>
            {
                match result {
                    Ok(reply) if reply.success => {
                        log::info!(
                            "{} parked at {}",
                            action.license_plate,
                            action.session.spot_number
                        );
                        self.alert(ENTERED_ALERT);
                        self.refresh_spots();
                        self.schedule_redirect(reply.redirect_url);
                    }
                    Ok(reply) => {
                        let err = WorkflowError::rejected(RequestKind::Entry, reply);
                        self.show_error(&err.to_string());
                    }
                    Err(e) => {
                        log::error!("vehicle entry failed: {}", e);
                        let err = WorkflowError::request(RequestKind::Entry, e);
                        self.show_error(&err.to_string());
                    }
                }
            }
            other => {
                log::warn!("stale entry reply for {:?} dropped", workflow);
                self.workflow = other;
            }
        }
    }
}
