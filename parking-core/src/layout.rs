/// Zones of the lot and how many numbered spots each one has.
pub const DEFAULT_ZONES: [(char, usize); 5] = [('A', 15), ('B', 24), ('C', 23), ('D', 12), ('E', 11)];

pub fn spot_ids(zones: &[(char, usize)]) -> Vec<String> {
    zones
        .iter()
        .flat_map(|(zone, count)| (1..=*count).map(move |n| format!("{}{}", zone, n)))
        .collect()
}

pub fn default_spot_ids() -> Vec<String> {
    spot_ids(&DEFAULT_ZONES)
}
