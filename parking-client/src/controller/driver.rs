use futures::{
    future::{poll_fn, LocalBoxFuture},
    stream::FuturesUnordered,
    FutureExt, StreamExt,
};
use tokio_util::sync::CancellationToken;

use crate::{
    interface::{ApiEvent, ApiRequest, SpotApi, SpotView, TimeoutScheduler},
    state_machine::actions::CoreActions,
};

use super::{config::ControllerConfig, core::SpotGridCore};

/// Runs a `SpotGridCore` against real collaborators on the current task.
/// Requests are polled concurrently with UI events and timers, so the view
/// stays live while a call is out.
pub struct SpotGridController<A: SpotApi, V: SpotView, T: TimeoutScheduler> {
    core: SpotGridCore,
    api: A,
    view: V,
    timers: T,
}

impl<A: SpotApi, V: SpotView, T: TimeoutScheduler> SpotGridController<A, V, T> {
    pub fn new(api: A, view: V, timers: T, config: ControllerConfig) -> Self {
        Self {
            core: SpotGridCore::new(config),
            api,
            view,
            timers,
        }
    }

    pub fn core(&self) -> &SpotGridCore {
        &self.core
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initializes the grid and runs until `stop_token` is cancelled.
    /// Requests still in flight at that point are dropped.
    pub async fn run(self, stop_token: CancellationToken) -> Self {
        let SpotGridController {
            mut core,
            api,
            mut view,
            mut timers,
        } = self;
        let mut in_flight: FuturesUnordered<LocalBoxFuture<'_, ApiEvent>> =
            FuturesUnordered::new();
        let mut actions = core.initialize();
        loop {
            for action in actions.drain(..) {
                match action {
                    CoreActions::Request(request) => {
                        in_flight.push(dispatch(&api, request));
                    }
                    CoreActions::AddTimeout(id, after) => {
                        log::trace!("add timeout, id: {:?}, after: {:?}", id, after);
                        timers.add_or_update_timeout(id, after);
                    }
                    CoreActions::RemoveTimeout(id) => {
                        log::trace!("remove timeout, id: {:?}", id);
                        timers.remove_timeout(id);
                    }
                    action => apply_to_view(&mut view, action),
                }
            }
            actions = tokio::select! {
                biased;
                _ = stop_token.cancelled() => {
                    log::debug!("stop_token cancelled");
                    break;
                }
                Some(event) = in_flight.next(), if !in_flight.is_empty() => {
                    core.handle_api_event(event)
                }
                event = poll_fn(|cx| view.poll_ui_event(cx)) => {
                    core.handle_ui_event(event)
                }
                id = poll_fn(|cx| timers.poll_timeout(cx)) => {
                    core.handle_timeout(id)
                }
            };
        }
        drop(in_flight);
        timers.remove_all_timeouts();
        Self {
            core,
            api,
            view,
            timers,
        }
    }
}

fn dispatch<A: SpotApi>(api: &A, request: ApiRequest) -> LocalBoxFuture<'_, ApiEvent> {
    match request {
        ApiRequest::FetchSpots => {
            async move { ApiEvent::SpotsFetched(api.fetch_spots().await) }.boxed_local()
        }
        ApiRequest::ValidateLicensePlate { workflow, request } => async move {
            ApiEvent::LicensePlateValidated {
                workflow,
                result: api.validate_license_plate(&request).await,
            }
        }
        .boxed_local(),
        ApiRequest::ReserveSpot { workflow, request } => async move {
            ApiEvent::SpotReserved {
                workflow,
                result: api.reserve_spot(&request).await,
            }
        }
        .boxed_local(),
        ApiRequest::Entry { workflow, request } => async move {
            ApiEvent::VehicleEntered {
                workflow,
                result: api.enter_vehicle(&request).await,
            }
        }
        .boxed_local(),
    }
}

fn apply_to_view<V: SpotView>(view: &mut V, action: CoreActions) {
    match action {
        CoreActions::BindSpots(spot_ids) => view.bind_spots(&spot_ids),
        CoreActions::RenderSpots(cells) => view.render_spots(&cells),
        CoreActions::ShowPromotion(banner) => view.show_promotion(&banner),
        CoreActions::HidePromotion => view.hide_promotion(),
        CoreActions::ShowError(message) => view.show_error(&message),
        CoreActions::HideError => view.hide_error(),
        CoreActions::SetLoading(visible) => view.set_loading(visible),
        CoreActions::Prompt(prompt) => view.prompt(&prompt),
        CoreActions::ShowTimePicker => view.show_time_picker(),
        CoreActions::HideTimePicker => view.hide_time_picker(),
        CoreActions::Alert(message) => view.alert(&message),
        CoreActions::Navigate(path) => view.navigate(&path),
        CoreActions::Request(_) | CoreActions::AddTimeout(..) | CoreActions::RemoveTimeout(_) => {
            // handled by the driver loop
        }
    }
}
