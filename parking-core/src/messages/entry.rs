use crate::types::VehicleType;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct EntryRequest {
    pub license_plate: String,
    pub spot_number: String,
    pub vehicle_type: VehicleType,
}
