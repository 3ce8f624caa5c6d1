use std::collections::{BTreeMap, HashMap};

use crate::models::result::{RaceResultRow, SprintPoints, StatusCount};
use crate::models::telemetry::{LapPoint, PitStopCount};
use crate::models::{ConstructorId, DriverId, RaceId, StatusId};
use crate::query::QueryEngine;

impl QueryEngine {
    /// Full classification of a race in finishing order, retirements last.
    pub fn race_results(&self, race_id: RaceId) -> Vec<RaceResultRow> {
        let mut results: Vec<_> = self.dataset.results(race_id).iter().collect();
        results.sort_by_key(|r| r.position_order);

        results
            .into_iter()
            .map(|r| RaceResultRow {
                driver_id: r.driver_id,
                driver: self.driver_label(r.driver_id),
                constructor: self.constructor_name(r.constructor_id),
                grid: r.grid,
                position: r.position,
                points: r.points,
                laps: r.laps,
                status: self.status_label(r.status_id),
            })
            .collect()
    }

    pub fn lap_times(&self, race_id: RaceId, driver_id: DriverId) -> Vec<LapPoint> {
        let mut laps: Vec<LapPoint> = self
            .dataset
            .lap_times(race_id)
            .iter()
            .filter(|l| l.driver_id == driver_id)
            .map(|l| LapPoint {
                lap: l.lap,
                time_ms: l.time_ms,
            })
            .collect();
        laps.sort_by_key(|l| l.lap);
        laps
    }

    /// Number of stops per driver. Drivers who never pitted do not appear.
    pub fn pit_stops(&self, race_id: RaceId) -> Vec<PitStopCount> {
        let mut per_driver: BTreeMap<DriverId, usize> = BTreeMap::new();
        for stop in self.dataset.pit_stops(race_id) {
            *per_driver.entry(stop.driver_id).or_insert(0) += 1;
        }

        let mut counts: Vec<PitStopCount> = per_driver
            .into_iter()
            .map(|(driver_id, stops)| PitStopCount {
                driver_id,
                driver: self.driver_label(driver_id),
                stops,
            })
            .collect();
        counts.sort_by(|a, b| b.stops.cmp(&a.stops).then_with(|| a.driver.cmp(&b.driver)));
        counts
    }

    pub fn status_counts(&self, race_id: RaceId) -> Vec<StatusCount> {
        let mut per_status: HashMap<StatusId, usize> = HashMap::new();
        for result in self.dataset.results(race_id) {
            *per_status.entry(result.status_id).or_insert(0) += 1;
        }

        let mut counts: Vec<StatusCount> = per_status
            .into_iter()
            .map(|(status_id, count)| StatusCount {
                status: self.status_label(status_id),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));
        counts
    }

    /// Sprint points of a race weekend, best first. Empty when the weekend had no sprint.
    pub fn sprint_results(&self, race_id: RaceId) -> Vec<SprintPoints> {
        let mut results: Vec<_> = self.dataset.sprint_results(race_id).iter().collect();
        results.sort_by_key(|r| r.position_order);
        results.sort_by(|a, b| b.points.total_cmp(&a.points));

        results
            .into_iter()
            .map(|r| SprintPoints {
                driver_id: r.driver_id,
                driver: self.driver_label(r.driver_id),
                constructor: self.constructor_name(r.constructor_id),
                position: r.position,
                points: r.points,
            })
            .collect()
    }

    fn constructor_name(&self, constructor_id: ConstructorId) -> String {
        self.dataset
            .constructor(constructor_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| constructor_id.to_string())
    }

    fn status_label(&self, status_id: StatusId) -> String {
        self.dataset
            .status(status_id)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| status_id.to_string())
    }
}
