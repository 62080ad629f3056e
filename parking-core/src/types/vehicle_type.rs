use core::fmt;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Truck,
    Ev,
}

impl VehicleType {
    /// Maps the numbered menu answer ("1", "2", "3") to a vehicle type.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(VehicleType::Car),
            "2" => Some(VehicleType::Truck),
            "3" => Some(VehicleType::Ev),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Truck => "truck",
            VehicleType::Ev => "ev",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
