use core::fmt;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Reserved,
    Occupied,
    // anything the server sends that we do not know renders as free
    #[default]
    #[serde(other)]
    Available,
}

impl SpotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotStatus::Available => "available",
            SpotStatus::Reserved => "reserved",
            SpotStatus::Occupied => "occupied",
        }
    }

    /// Label shown inside the grid cell.
    pub fn label(&self) -> &'static str {
        match self {
            SpotStatus::Available => "可用",
            SpotStatus::Reserved => "已预订",
            SpotStatus::Occupied => "占用",
        }
    }
}

impl fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
