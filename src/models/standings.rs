use serde::{Deserialize, Serialize};

use crate::models::{ConstructorId, DriverId, RaceId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStanding {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,
    #[serde(rename = "driverId")]
    pub driver_id: DriverId,
    pub points: f64,
    pub position: u32,
    pub wins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStanding {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,
    #[serde(rename = "constructorId")]
    pub constructor_id: ConstructorId,
    pub points: f64,
    pub position: u32,
    pub wins: u32,
}

/// Championship position of a driver or constructor. `rank` is the stored
/// snapshot value and is never recomputed from points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub id: u32,
    pub name: String,
    pub points: f64,
    pub rank: u32,
    pub wins: u32,
}
