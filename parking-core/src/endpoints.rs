pub const SPOTS_DATA: &str = "/parking_lot/data/";
pub const VALIDATE_LICENSE_PLATE: &str = "/validate_license_plate/";
pub const RESERVE_SPOT: &str = "/reserve_spot/";
pub const ENTRY: &str = "/entry/";

/// Page the user lands on after a reservation or entry succeeds.
pub const PERSONAL_CENTER: &str = "/we/";

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";
