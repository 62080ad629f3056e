use crate::{controller::core::SpotGridCore, interface::TimerId};

use super::actions::CoreActions;

impl SpotGridCore {
    /// Shows the error toast; a newer message restarts the hide timer.
    pub(crate) fn show_error(&mut self, message: &str) {
        log::warn!("{}", message);
        self.queued_actions
            .push_back(CoreActions::ShowError(message.to_string()));
        self.add_timeout(TimerId::ErrorToast, self.config.error_toast());
    }

    pub(crate) fn hide_error(&mut self) {
        self.queued_actions.push_back(CoreActions::HideError);
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading_requests += 1;
        if self.loading_requests == 1 {
            self.queued_actions.push_back(CoreActions::SetLoading(true));
        }
    }

    pub(crate) fn end_loading(&mut self) {
        match self.loading_requests {
            0 => {
                log::warn!("loading finished with nothing outstanding");
            }
            1 => {
                self.loading_requests = 0;
                self.queued_actions.push_back(CoreActions::SetLoading(false));
            }
            _ => {
                self.loading_requests -= 1;
            }
        }
    }

    pub(crate) fn schedule_redirect(&mut self, target: Option<String>) {
        let target = target
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.config.redirect_path.clone());
        log::debug!("redirect to {} scheduled", target);
        self.pending_redirect = Some(target);
        self.add_timeout(TimerId::Redirect, self.config.redirect_delay());
    }

    pub(crate) fn on_redirect_timeout(&mut self) {
        match self.pending_redirect.take() {
            Some(target) => self.navigate(target),
            None => {
                log::warn!("redirect timer fired without a target");
            }
        }
    }
}
