use serde::{Deserialize, Serialize};

use crate::models::{DriverId, RaceId};
use crate::store::{duration, missing};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LapTimeRow")]
pub struct LapTime {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub lap: u32,
    pub position: Option<u32>,
    pub time_ms: u32,
}

#[derive(Deserialize)]
struct LapTimeRow {
    #[serde(rename = "raceId")]
    race_id: RaceId,
    #[serde(rename = "driverId")]
    driver_id: DriverId,
    lap: u32,
    #[serde(default, deserialize_with = "missing::optional")]
    position: Option<u32>,
    #[serde(default, deserialize_with = "missing::optional")]
    time: Option<String>,
    #[serde(default, deserialize_with = "missing::optional")]
    milliseconds: Option<u32>,
}

impl TryFrom<LapTimeRow> for LapTime {
    type Error = String;

    fn try_from(row: LapTimeRow) -> Result<Self, Self::Error> {
        let time_ms = duration::resolve(row.milliseconds, row.time.as_deref()).ok_or_else(|| {
            format!(
                "lap {} of driver {} in race {} has no usable time",
                row.lap, row.driver_id, row.race_id
            )
        })?;
        Ok(LapTime {
            race_id: row.race_id,
            driver_id: row.driver_id,
            lap: row.lap,
            position: row.position,
            time_ms,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PitStopRow")]
pub struct PitStop {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub stop: u32,
    pub lap: Option<u32>,
    pub duration_ms: Option<u32>,
}

#[derive(Deserialize)]
struct PitStopRow {
    #[serde(rename = "raceId")]
    race_id: RaceId,
    #[serde(rename = "driverId")]
    driver_id: DriverId,
    stop: u32,
    #[serde(default, deserialize_with = "missing::optional")]
    lap: Option<u32>,
    #[serde(default, deserialize_with = "missing::optional")]
    duration: Option<String>,
    #[serde(default, deserialize_with = "missing::optional")]
    milliseconds: Option<u32>,
}

impl From<PitStopRow> for PitStop {
    fn from(row: PitStopRow) -> Self {
        PitStop {
            race_id: row.race_id,
            driver_id: row.driver_id,
            stop: row.stop,
            lap: row.lap,
            duration_ms: duration::resolve(row.milliseconds, row.duration.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LapPoint {
    pub lap: u32,
    pub time_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitStopCount {
    pub driver_id: DriverId,
    pub driver: String,
    pub stops: usize,
}
