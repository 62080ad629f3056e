use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    task::{Context, Poll},
};

use futures::task::AtomicWaker;
use parking_client::{Prompt, SpotView, UiEvent};
use parking_core::types::{PromotionBanner, SpotCell};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Bind(Vec<String>),
    Render(Vec<SpotCell>),
    ShowPromotion(PromotionBanner),
    HidePromotion,
    ShowError(String),
    HideError,
    Loading(bool),
    Prompt(Prompt),
    ShowTimePicker,
    HideTimePicker,
    Alert(String),
    Navigate(String),
}

#[derive(Debug, Default)]
struct Inner {
    calls: Mutex<Vec<ViewCall>>,
    events: Mutex<VecDeque<UiEvent>>,
    prompt_answers: Mutex<VecDeque<Option<String>>>,
    reservation_times: Mutex<VecDeque<Option<String>>>,
    waker: AtomicWaker,
}

impl Inner {
    fn push_event(&self, event: UiEvent) {
        self.events.lock().unwrap().push_back(event);
        self.waker.wake();
    }
}

/// Records everything drawn and plays back scripted user input: each prompt
/// consumes one scripted answer, each time picker one scripted time.
pub struct MockView {
    inner: Arc<Inner>,
}

#[derive(Debug, Clone)]
pub struct MockViewHandle {
    inner: Arc<Inner>,
}

impl MockView {
    pub fn new() -> (Self, MockViewHandle) {
        let inner = Arc::new(Inner::default());
        (
            Self {
                inner: inner.clone(),
            },
            MockViewHandle { inner },
        )
    }

    fn record(&self, call: ViewCall) {
        self.inner.calls.lock().unwrap().push(call);
    }
}

impl SpotView for MockView {
    fn bind_spots(&mut self, spot_ids: &[String]) {
        self.record(ViewCall::Bind(spot_ids.to_vec()));
    }

    fn render_spots(&mut self, cells: &[SpotCell]) {
        self.record(ViewCall::Render(cells.to_vec()));
    }

    fn show_promotion(&mut self, banner: &PromotionBanner) {
        self.record(ViewCall::ShowPromotion(banner.clone()));
    }

    fn hide_promotion(&mut self) {
        self.record(ViewCall::HidePromotion);
    }

    fn show_error(&mut self, message: &str) {
        self.record(ViewCall::ShowError(message.to_string()));
    }

    fn hide_error(&mut self) {
        self.record(ViewCall::HideError);
    }

    fn set_loading(&mut self, visible: bool) {
        self.record(ViewCall::Loading(visible));
    }

    fn prompt(&mut self, prompt: &Prompt) {
        self.record(ViewCall::Prompt(prompt.clone()));
        if let Some(answer) = self.inner.prompt_answers.lock().unwrap().pop_front() {
            self.inner.push_event(UiEvent::PromptAnswered(answer));
        }
    }

    fn show_time_picker(&mut self) {
        self.record(ViewCall::ShowTimePicker);
        if let Some(time) = self.inner.reservation_times.lock().unwrap().pop_front() {
            let event = match time {
                Some(time) => UiEvent::ReservationTimeSubmitted(time),
                None => UiEvent::ReservationTimeCancelled,
            };
            self.inner.push_event(event);
        }
    }

    fn hide_time_picker(&mut self) {
        self.record(ViewCall::HideTimePicker);
    }

    fn alert(&mut self, message: &str) {
        self.record(ViewCall::Alert(message.to_string()));
    }

    fn navigate(&mut self, path: &str) {
        self.record(ViewCall::Navigate(path.to_string()));
    }

    fn poll_ui_event(&mut self, cx: &mut Context<'_>) -> Poll<UiEvent> {
        if let Some(event) = self.inner.events.lock().unwrap().pop_front() {
            return Poll::Ready(event);
        }
        self.inner.waker.register(cx.waker());
        if let Some(event) = self.inner.events.lock().unwrap().pop_front() {
            return Poll::Ready(event);
        }
        Poll::Pending
    }
}

impl MockViewHandle {
    pub fn click(&self, spot_number: &str) {
        self.inner
            .push_event(UiEvent::SpotClicked(spot_number.to_string()));
    }

    pub fn script_answers(&self, answers: &[Option<&str>]) {
        self.inner
            .prompt_answers
            .lock()
            .unwrap()
            .extend(answers.iter().map(|a| a.map(str::to_string)));
    }

    pub fn script_reservation_time(&self, time: Option<&str>) {
        self.inner
            .reservation_times
            .lock()
            .unwrap()
            .push_back(time.map(str::to_string));
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn last_render(&self) -> Option<Vec<SpotCell>> {
        self.calls().into_iter().rev().find_map(|c| match c {
            ViewCall::Render(cells) => Some(cells),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ViewCall::Alert(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ViewCall::Navigate(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ViewCall::ShowError(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }
}
