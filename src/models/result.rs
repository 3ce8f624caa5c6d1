use serde::{Deserialize, Serialize};

use crate::models::{ConstructorId, DriverId, RaceId, StatusId};
use crate::store::missing;

/// A classified (or retired) entry of a race. Sprint sessions share the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,
    #[serde(rename = "driverId")]
    pub driver_id: DriverId,
    #[serde(rename = "constructorId")]
    pub constructor_id: ConstructorId,
    #[serde(default, deserialize_with = "missing::optional")]
    pub grid: Option<u32>,
    /// `None` when the driver was not classified.
    #[serde(default, deserialize_with = "missing::optional")]
    pub position: Option<u32>,
    #[serde(rename = "positionOrder")]
    pub position_order: u32,
    pub points: f64,
    pub laps: u32,
    #[serde(rename = "statusId")]
    pub status_id: StatusId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorResult {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,
    #[serde(rename = "constructorId")]
    pub constructor_id: ConstructorId,
    #[serde(default, deserialize_with = "missing::optional")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceResultRow {
    pub driver_id: DriverId,
    pub driver: String,
    pub constructor: String,
    pub grid: Option<u32>,
    pub position: Option<u32>,
    pub points: f64,
    pub laps: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintPoints {
    pub driver_id: DriverId,
    pub driver: String,
    pub constructor: String,
    pub position: Option<u32>,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}
