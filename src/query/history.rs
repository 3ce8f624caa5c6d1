use std::collections::{BTreeMap, HashMap};

use crate::models::race::{CircuitLocation, CountryCount, SeasonRaceCount};
use crate::models::{CircuitId, Year};
use crate::query::QueryEngine;

const UNKNOWN_COUNTRY: &str = "Unknown";

impl QueryEngine {
    pub fn races_per_season(&self) -> Vec<SeasonRaceCount> {
        let mut per_year: BTreeMap<Year, usize> = BTreeMap::new();
        for race in self.dataset.races() {
            *per_year.entry(race.year).or_insert(0) += 1;
        }
        per_year
            .into_iter()
            .map(|(year, races)| SeasonRaceCount { year, races })
            .collect()
    }

    pub fn races_by_country(&self, year: Year) -> Vec<CountryCount> {
        self.race_counts_by_country(Some(year))
    }

    /// Races hosted per country, most first. `None` counts every season.
    pub fn race_counts_by_country(&self, year: Option<Year>) -> Vec<CountryCount> {
        let mut per_country: HashMap<&str, usize> = HashMap::new();
        for race in self.dataset.races() {
            if year.is_some_and(|y| y != race.year) {
                continue;
            }
            let country = self
                .dataset
                .circuit(race.circuit_id)
                .and_then(|c| c.country.as_deref())
                .unwrap_or(UNKNOWN_COUNTRY);
            *per_country.entry(country).or_insert(0) += 1;
        }

        let mut counts: Vec<CountryCount> = per_country
            .into_iter()
            .map(|(country, races)| CountryCount {
                country: country.to_string(),
                races,
            })
            .collect();
        counts.sort_by(|a, b| b.races.cmp(&a.races).then_with(|| a.country.cmp(&b.country)));
        counts
    }

    /// Every circuit that has hosted a race, with its all-time race count.
    /// Circuits without coordinates cannot be placed on a map and are left out.
    pub fn circuit_locations(&self) -> Vec<CircuitLocation> {
        let mut per_circuit: BTreeMap<CircuitId, usize> = BTreeMap::new();
        for race in self.dataset.races() {
            *per_circuit.entry(race.circuit_id).or_insert(0) += 1;
        }

        per_circuit
            .into_iter()
            .filter_map(|(circuit_id, races)| {
                let circuit = self.dataset.circuit(circuit_id)?;
                Some(CircuitLocation {
                    circuit_id,
                    name: circuit.name.clone(),
                    location: circuit.location.clone(),
                    country: circuit.country.clone(),
                    lat: circuit.lat?,
                    lng: circuit.lng?,
                    races,
                })
            })
            .collect()
    }
}
