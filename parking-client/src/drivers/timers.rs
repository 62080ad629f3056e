use std::{
    collections::{BTreeSet, HashMap},
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use tokio::time::{Instant, Sleep};

use crate::interface::{TimeoutScheduler, TimerId};

// roughly 30 years, used when a delay does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// One pending deadline per `TimerId`, backed by a single tokio `Sleep` for
/// the earliest one.
pub struct TokioTimerService {
    timer_deadlines: HashMap<TimerId, Instant>,
    deadline_queue: BTreeSet<(Instant, TimerId)>,
    active_sleep: Option<(Pin<Box<Sleep>>, TimerId)>,
    needs_reschedule: bool,
}

impl TokioTimerService {
    pub fn new() -> Self {
        Self {
            timer_deadlines: HashMap::new(),
            deadline_queue: BTreeSet::new(),
            active_sleep: None,
            needs_reschedule: false,
        }
    }

    fn next_deadline(&self) -> Option<(Instant, TimerId)> {
        self.deadline_queue.iter().next().copied()
    }

    fn expire(&mut self, id: TimerId) -> TimerId {
        if let Some(deadline) = self.timer_deadlines.remove(&id) {
            self.deadline_queue.remove(&(deadline, id));
        }
        self.active_sleep = None;
        self.needs_reschedule = true;
        id
    }
}

impl Default for TokioTimerService {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeoutScheduler for TokioTimerService {
    fn add_or_update_timeout(&mut self, id: TimerId, after: Duration) {
        let now = Instant::now();
        let when = now.checked_add(after).unwrap_or_else(|| {
            log::warn!("timeout {:?} after {:?} out of range, parking it", id, after);
            now + FAR_FUTURE
        });
        if let Some(prev) = self.timer_deadlines.insert(id, when) {
            self.deadline_queue.remove(&(prev, id));
        }
        self.deadline_queue.insert((when, id));
        self.needs_reschedule = true;
    }

    fn remove_timeout(&mut self, id: TimerId) {
        if let Some(prev) = self.timer_deadlines.remove(&id) {
            self.deadline_queue.remove(&(prev, id));
        }
        self.needs_reschedule = true;
    }

    fn remove_all_timeouts(&mut self) {
        self.timer_deadlines.clear();
        self.deadline_queue.clear();
        self.active_sleep = None;
        self.needs_reschedule = false;
    }

    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId> {
        if self.needs_reschedule {
            self.needs_reschedule = false;
            self.active_sleep = None;
            let (deadline, timer_id) = match self.next_deadline() {
                Some(v) => v,
                None => return Poll::Pending,
            };
            if Instant::now() >= deadline {
                return Poll::Ready(self.expire(timer_id));
            }
            self.active_sleep = Some((Box::pin(tokio::time::sleep_until(deadline)), timer_id));
        }
        let expired = match &mut self.active_sleep {
            Some((sleep_fut, id)) => match sleep_fut.as_mut().poll(cx) {
                Poll::Ready(()) => *id,
                Poll::Pending => return Poll::Pending,
            },
            None => return Poll::Pending,
        };
        Poll::Ready(self.expire(expired))
    }
}
