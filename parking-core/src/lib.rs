pub mod endpoints;
pub mod format;
pub mod layout;
pub mod messages;
pub mod types;
