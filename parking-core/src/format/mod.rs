pub mod cookie;
pub mod datetime;
pub mod error;
pub mod half_width;
