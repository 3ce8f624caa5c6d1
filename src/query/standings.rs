use crate::models::standings::StandingRow;
use crate::models::{RaceId, Year};
use crate::query::QueryEngine;

impl QueryEngine {
    /// Final drivers' championship of a season: the snapshot stored with the
    /// season's last race, ordered by the stored rank.
    pub fn driver_standings(&self, year: Year) -> Vec<StandingRow> {
        let dataset = self.dataset();
        let snapshot = self.final_snapshot(year, |race_id| dataset.driver_standings(race_id));

        let mut rows: Vec<StandingRow> = snapshot
            .iter()
            .map(|standing| StandingRow {
                id: standing.driver_id,
                name: self.driver_label(standing.driver_id),
                points: standing.points,
                rank: standing.position,
                wins: standing.wins,
            })
            .collect();
        rows.sort_by_key(|row| row.rank);
        rows
    }

    pub fn constructor_standings(&self, year: Year) -> Vec<StandingRow> {
        let dataset = self.dataset();
        let snapshot = self.final_snapshot(year, |race_id| dataset.constructor_standings(race_id));

        let mut rows: Vec<StandingRow> = snapshot
            .iter()
            .map(|standing| StandingRow {
                id: standing.constructor_id,
                name: dataset
                    .constructor(standing.constructor_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| standing.constructor_id.to_string()),
                points: standing.points,
                rank: standing.position,
                wins: standing.wins,
            })
            .collect();
        rows.sort_by_key(|row| row.rank);
        rows
    }

    /// Standings rows attached to the highest round of `year` that carries a snapshot.
    /// Rounds without one (scheduled but not yet run) are skipped.
    fn final_snapshot<'a, T>(
        &'a self,
        year: Year,
        snapshot: impl Fn(RaceId) -> &'a [T],
    ) -> &'a [T] {
        self.dataset
            .races_in(year)
            .rev()
            .map(|race| snapshot(race.race_id))
            .find(|rows| !rows.is_empty())
            .unwrap_or(&[])
    }
}
