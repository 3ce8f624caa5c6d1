use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CircuitId, RaceId, Year};
use crate::store::missing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub year: Year,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,
    pub year: Year,
    pub round: u32,
    #[serde(rename = "circuitId")]
    pub circuit_id: CircuitId,
    pub name: String,
    #[serde(default, deserialize_with = "missing::optional")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub sprint_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: CircuitId,
    pub name: String,
    #[serde(default, deserialize_with = "missing::optional")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub lng: Option<f64>,
}

/// One entry of the race picker for a season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceSummary {
    pub race_id: RaceId,
    pub round: u32,
    pub name: String,
    pub date: Option<NaiveDate>,
    /// Set on sprint weekends.
    pub sprint_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRaceCount {
    pub year: Year,
    pub races: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub races: usize,
}

/// A circuit with coordinates and the number of races it has hosted across every season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitLocation {
    pub circuit_id: CircuitId,
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub races: usize,
}
