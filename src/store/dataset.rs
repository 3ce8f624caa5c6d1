use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::driver::{Constructor, Driver, Status};
use crate::models::race::{Circuit, Race, Season};
use crate::models::result::{ConstructorResult, RaceResult};
use crate::models::standings::{ConstructorStanding, DriverStanding};
use crate::models::telemetry::{LapTime, PitStop};
use crate::models::{CircuitId, ConstructorId, DriverId, RaceId, StatusId, Year};
use crate::store::integrity::IntegrityReport;

/// Every table as read from disk, before any reference checking.
pub(crate) struct RawTables {
    pub seasons: Vec<Season>,
    pub races: Vec<Race>,
    pub circuits: Vec<Circuit>,
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
    pub statuses: Vec<Status>,
    pub results: Vec<RaceResult>,
    pub sprint_results: Vec<RaceResult>,
    pub driver_standings: Vec<DriverStanding>,
    pub constructor_standings: Vec<ConstructorStanding>,
    pub lap_times: Vec<LapTime>,
    pub pit_stops: Vec<PitStop>,
    pub constructor_results: Vec<ConstructorResult>,
}

/// The immutable, reference-checked championship dataset.
///
/// Child rows are grouped per race and keep their file order inside each group.
#[derive(Debug, Default)]
pub struct Dataset {
    seasons: Vec<Year>,
    races: Vec<Race>,
    race_index: HashMap<RaceId, usize>,
    circuits: HashMap<CircuitId, Circuit>,
    drivers: HashMap<DriverId, Driver>,
    constructors: HashMap<ConstructorId, Constructor>,
    statuses: HashMap<StatusId, Status>,
    results: HashMap<RaceId, Vec<RaceResult>>,
    sprint_results: HashMap<RaceId, Vec<RaceResult>>,
    driver_standings: HashMap<RaceId, Vec<DriverStanding>>,
    constructor_standings: HashMap<RaceId, Vec<ConstructorStanding>>,
    lap_times: HashMap<RaceId, Vec<LapTime>>,
    pit_stops: HashMap<RaceId, Vec<PitStop>>,
    constructor_results: HashMap<RaceId, Vec<ConstructorResult>>,
    integrity: IntegrityReport,
}

impl Dataset {
    pub(crate) fn assemble(raw: RawTables) -> Self {
        let mut report = IntegrityReport::default();

        let seasons: BTreeSet<Year> = raw.seasons.iter().map(|s| s.year).collect();
        let circuits: HashMap<_, _> = raw
            .circuits
            .into_iter()
            .map(|c| (c.circuit_id, c))
            .collect();
        let drivers: HashMap<_, _> = raw.drivers.into_iter().map(|d| (d.driver_id, d)).collect();
        let constructors: HashMap<_, _> = raw
            .constructors
            .into_iter()
            .map(|c| (c.constructor_id, c))
            .collect();
        let statuses: HashMap<_, _> = raw.statuses.into_iter().map(|s| (s.status_id, s)).collect();

        let mut rounds = HashSet::new();
        let mut races = report.retain("races", raw.races, |race| {
            if !seasons.contains(&race.year) {
                return Err(format!("race {} belongs to unknown season {}", race.race_id, race.year));
            }
            if !circuits.contains_key(&race.circuit_id) {
                return Err(format!("race {} references unknown circuit {}", race.race_id, race.circuit_id));
            }
            if !rounds.insert((race.year, race.round)) {
                return Err(format!(
                    "race {} repeats round {} of {}",
                    race.race_id, race.round, race.year
                ));
            }
            Ok(())
        });
        races.sort_by_key(|race| (race.year, race.round));
        let race_index: HashMap<_, _> = races
            .iter()
            .enumerate()
            .map(|(i, race)| (race.race_id, i))
            .collect();

        let known_race = |race_id: RaceId| -> Result<(), String> {
            if race_index.contains_key(&race_id) {
                Ok(())
            } else {
                Err(format!("unknown race {race_id}"))
            }
        };
        let known_driver = |driver_id: DriverId| -> Result<(), String> {
            if drivers.contains_key(&driver_id) {
                Ok(())
            } else {
                Err(format!("unknown driver {driver_id}"))
            }
        };
        let known_constructor = |constructor_id: ConstructorId| -> Result<(), String> {
            if constructors.contains_key(&constructor_id) {
                Ok(())
            } else {
                Err(format!("unknown constructor {constructor_id}"))
            }
        };
        let check_result = |row: &RaceResult| -> Result<(), String> {
            known_race(row.race_id)?;
            known_driver(row.driver_id)?;
            known_constructor(row.constructor_id)?;
            if statuses.contains_key(&row.status_id) {
                Ok(())
            } else {
                Err(format!("unknown status {}", row.status_id))
            }
        };

        let results = report.retain("results", raw.results, check_result);
        let sprint_results = report.retain("sprint_results", raw.sprint_results, check_result);
        let driver_standings = report.retain("driver_standings", raw.driver_standings, |row| {
            known_race(row.race_id)?;
            known_driver(row.driver_id)
        });
        let constructor_standings =
            report.retain("constructor_standings", raw.constructor_standings, |row| {
                known_race(row.race_id)?;
                known_constructor(row.constructor_id)
            });
        let mut laps_seen = HashSet::new();
        let lap_times = report.retain("lap_times", raw.lap_times, |row| {
            known_race(row.race_id)?;
            known_driver(row.driver_id)?;
            if laps_seen.insert((row.race_id, row.driver_id, row.lap)) {
                Ok(())
            } else {
                Err(format!(
                    "duplicate lap {} for driver {} in race {}",
                    row.lap, row.driver_id, row.race_id
                ))
            }
        });
        let pit_stops = report.retain("pit_stops", raw.pit_stops, |row| {
            known_race(row.race_id)?;
            known_driver(row.driver_id)
        });
        let constructor_results =
            report.retain("constructor_results", raw.constructor_results, |row| {
                known_race(row.race_id)?;
                known_constructor(row.constructor_id)
            });

        Dataset {
            seasons: seasons.into_iter().collect(),
            results: group_by_race(results, |r| r.race_id),
            sprint_results: group_by_race(sprint_results, |r| r.race_id),
            driver_standings: group_by_race(driver_standings, |s| s.race_id),
            constructor_standings: group_by_race(constructor_standings, |s| s.race_id),
            lap_times: group_by_race(lap_times, |l| l.race_id),
            pit_stops: group_by_race(pit_stops, |p| p.race_id),
            constructor_results: group_by_race(constructor_results, |c| c.race_id),
            races,
            race_index,
            circuits,
            drivers,
            constructors,
            statuses,
            integrity: report,
        }
    }

    /// Season years, ascending.
    pub fn seasons(&self) -> &[Year] {
        &self.seasons
    }

    /// All races ordered by (year, round).
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    pub fn race(&self, race_id: RaceId) -> Option<&Race> {
        self.race_index.get(&race_id).map(|&i| &self.races[i])
    }

    pub fn races_in(&self, year: Year) -> impl DoubleEndedIterator<Item = &Race> + '_ {
        self.races.iter().filter(move |race| race.year == year)
    }

    pub fn circuit(&self, circuit_id: CircuitId) -> Option<&Circuit> {
        self.circuits.get(&circuit_id)
    }

    pub fn driver(&self, driver_id: DriverId) -> Option<&Driver> {
        self.drivers.get(&driver_id)
    }

    pub fn constructor(&self, constructor_id: ConstructorId) -> Option<&Constructor> {
        self.constructors.get(&constructor_id)
    }

    pub fn status(&self, status_id: StatusId) -> Option<&Status> {
        self.statuses.get(&status_id)
    }

    pub fn results(&self, race_id: RaceId) -> &[RaceResult] {
        slice(&self.results, race_id)
    }

    pub fn sprint_results(&self, race_id: RaceId) -> &[RaceResult] {
        slice(&self.sprint_results, race_id)
    }

    pub fn driver_standings(&self, race_id: RaceId) -> &[DriverStanding] {
        slice(&self.driver_standings, race_id)
    }

    pub fn constructor_standings(&self, race_id: RaceId) -> &[ConstructorStanding] {
        slice(&self.constructor_standings, race_id)
    }

    pub fn lap_times(&self, race_id: RaceId) -> &[LapTime] {
        slice(&self.lap_times, race_id)
    }

    pub fn pit_stops(&self, race_id: RaceId) -> &[PitStop] {
        slice(&self.pit_stops, race_id)
    }

    pub fn constructor_results(&self, race_id: RaceId) -> &[ConstructorResult] {
        slice(&self.constructor_results, race_id)
    }

    pub fn integrity(&self) -> &IntegrityReport {
        &self.integrity
    }
}

fn group_by_race<T>(rows: Vec<T>, key: impl Fn(&T) -> RaceId) -> HashMap<RaceId, Vec<T>> {
    let mut grouped: HashMap<RaceId, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}

fn slice<T>(map: &HashMap<RaceId, Vec<T>>, race_id: RaceId) -> &[T] {
    map.get(&race_id).map(Vec::as_slice).unwrap_or(&[])
}
