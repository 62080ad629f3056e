use crate::types::VehicleType;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ReserveSpotRequest {
    pub spot_number: String,
    pub license_plate: String,
    pub vehicle_type: VehicleType,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM`.
    pub reservation_use_time: String,
}
