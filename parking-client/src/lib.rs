mod controller;
mod drivers;
mod error;
mod interface;
mod state_machine;

pub use controller::{config::ControllerConfig, core::SpotGridCore, driver::SpotGridController};
pub use error::{RequestKind, WorkflowError};
pub use interface::{
    ApiEvent, ApiRequest, Prompt, SpotApi, SpotView, TimeoutScheduler, TimerId, UiEvent,
    WorkflowId,
};
pub use state_machine::{
    actions::CoreActions,
    workflow::{
        check_reservation_time, select_vehicle_type, validate_license_plate, PendingAction,
        VehicleTypeChoice, WorkflowKind, WorkflowSession, WorkflowStep,
    },
};

#[cfg(feature = "tokio_timer")]
pub use drivers::timers::TokioTimerService;
