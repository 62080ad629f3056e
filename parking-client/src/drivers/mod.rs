#[cfg(feature = "tokio_timer")]
pub(crate) mod timers;
