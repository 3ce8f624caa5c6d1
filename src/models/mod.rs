pub mod cache;
pub mod driver;
pub mod error;
pub mod race;
pub mod result;
pub mod standings;
pub mod telemetry;

pub type Year = i32;
pub type RaceId = u32;
pub type CircuitId = u32;
pub type DriverId = u32;
pub type ConstructorId = u32;
pub type StatusId = u32;
