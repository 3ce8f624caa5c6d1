//! Derived views over the loaded dataset.
//!
//! Every operation is a pure read: an id or year that matches nothing yields an empty
//! sequence, never an error.

mod history;
mod race;
mod season;
mod standings;

use std::sync::Arc;

use crate::models::driver::Driver;
use crate::models::DriverId;
use crate::store::Dataset;

#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
}

impl QueryEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn driver_label(&self, driver_id: DriverId) -> String {
        self.dataset
            .driver(driver_id)
            .map(Driver::label)
            .unwrap_or_else(|| driver_id.to_string())
    }
}
