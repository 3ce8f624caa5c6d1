pub mod dataset;
pub mod duration;
pub mod integrity;
pub mod missing;

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub use dataset::Dataset;
pub use integrity::IntegrityReport;

use crate::models::error::DataLoadError;
use dataset::RawTables;

/// Every table that must be present in the data directory, without the `.csv` suffix.
pub const REQUIRED_TABLES: [&str; 13] = [
    "seasons",
    "races",
    "circuits",
    "drivers",
    "constructors",
    "results",
    "status",
    "driver_standings",
    "constructor_standings",
    "lap_times",
    "pit_stops",
    "sprint_results",
    "constructor_results",
];

/// Reads the championship tables from a directory of CSV files.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    root: PathBuf,
}

impl DatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads and reference-checks every table. Repeated calls re-read the files and
    /// yield an equivalent dataset.
    pub fn load(&self) -> Result<Dataset, DataLoadError> {
        if !self.root.is_dir() {
            return Err(DataLoadError::MissingDirectory(self.root.clone()));
        }
        for table in REQUIRED_TABLES {
            let path = self.table_path(table);
            if !path.is_file() {
                return Err(DataLoadError::MissingTable { table, path });
            }
        }

        info!(root = %self.root.display(), "loading dataset");
        let raw = RawTables {
            seasons: self.read_table("seasons")?,
            races: self.read_table("races")?,
            circuits: self.read_table("circuits")?,
            drivers: self.read_table("drivers")?,
            constructors: self.read_table("constructors")?,
            statuses: self.read_table("status")?,
            results: self.read_table("results")?,
            sprint_results: self.read_table("sprint_results")?,
            driver_standings: self.read_table("driver_standings")?,
            constructor_standings: self.read_table("constructor_standings")?,
            lap_times: self.read_table("lap_times")?,
            pit_stops: self.read_table("pit_stops")?,
            constructor_results: self.read_table("constructor_results")?,
        };

        let dataset = Dataset::assemble(raw);
        let report = dataset.integrity();
        if report.is_clean() {
            info!(
                seasons = dataset.seasons().len(),
                races = dataset.races().len(),
                "dataset loaded"
            );
        } else {
            for (table, dropped) in report.tables() {
                info!(table, dropped, "rows dropped for reference integrity");
            }
            info!(
                seasons = dataset.seasons().len(),
                races = dataset.races().len(),
                dropped = report.total(),
                "dataset loaded"
            );
        }
        Ok(dataset)
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.csv"))
    }

    fn read_table<T: DeserializeOwned>(&self, table: &'static str) -> Result<Vec<T>, DataLoadError> {
        let path = self.table_path(table);
        let file = File::open(&path).map_err(|source| DataLoadError::Io { table, source })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let rows = reader
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| DataLoadError::Csv { table, source })?;
        debug!(table, rows = rows.len(), "table read");
        Ok(rows)
    }
}
