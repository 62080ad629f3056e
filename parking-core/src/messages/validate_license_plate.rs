#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ValidateLicensePlateRequest {
    pub license_plate: String,
}
