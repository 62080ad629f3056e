use std::sync::LazyLock;

use regex::Regex;

static RESERVATION_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}$").unwrap());

/// Checks the `YYYY-MM-DDTHH:MM` shape a datetime-local input produces.
/// Only the shape is checked, the server parses the value.
pub fn is_valid_reservation_time(input: &str) -> bool {
    RESERVATION_TIME.is_match(input)
}
