pub(crate) mod actions;
pub(crate) mod feedback;
pub(crate) mod refresh;
pub(crate) mod workflow;
