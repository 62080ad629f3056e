pub mod entry;
pub mod reply;
pub mod reserve_spot;
pub mod spots;
pub mod validate_license_plate;
