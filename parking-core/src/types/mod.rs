mod promotion;
mod spot;
mod spot_status;
mod vehicle_type;

pub use promotion::*;
pub use spot::*;
pub use spot_status::*;
pub use vehicle_type::*;
