use crate::models::race::RaceSummary;
use crate::models::Year;
use crate::query::QueryEngine;

impl QueryEngine {
    pub fn list_seasons(&self) -> Vec<Year> {
        self.dataset.seasons().to_vec()
    }

    /// Races of a season in round order.
    pub fn list_races(&self, year: Year) -> Vec<RaceSummary> {
        self.dataset
            .races_in(year)
            .map(|race| RaceSummary {
                race_id: race.race_id,
                round: race.round,
                name: race.name.clone(),
                date: race.date,
                sprint_date: race.sprint_date,
            })
            .collect()
    }
}
