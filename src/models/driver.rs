use serde::{Deserialize, Serialize};

use crate::models::{ConstructorId, DriverId, StatusId};
use crate::store::missing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: DriverId,
    #[serde(default, deserialize_with = "missing::optional")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub forename: Option<String>,
    #[serde(default, deserialize_with = "missing::optional")]
    pub surname: Option<String>,
}

impl Driver {
    /// Short display name: the three letter code when the driver has one,
    /// otherwise "L. Surname", falling back to the raw id.
    pub fn label(&self) -> String {
        if let Some(code) = &self.code {
            return code.clone();
        }
        if let (Some(forename), Some(surname)) = (&self.forename, &self.surname) {
            if let Some(initial) = forename.chars().next() {
                return format!("{initial}. {surname}");
            }
        }
        self.driver_id.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: ConstructorId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "statusId")]
    pub status_id: StatusId,
    #[serde(rename = "status")]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(code: Option<&str>, forename: Option<&str>, surname: Option<&str>) -> Driver {
        Driver {
            driver_id: 8,
            code: code.map(String::from),
            forename: forename.map(String::from),
            surname: surname.map(String::from),
        }
    }

    #[test]
    fn label_prefers_code() {
        let d = driver(Some("RAI"), Some("Kimi"), Some("Räikkönen"));
        assert_eq!(d.label(), "RAI");
    }

    #[test]
    fn label_falls_back_to_initial_and_surname() {
        let d = driver(None, Some("Éric"), Some("Bernard"));
        assert_eq!(d.label(), "É. Bernard");
    }

    #[test]
    fn label_falls_back_to_id() {
        assert_eq!(driver(None, None, Some("Prost")).label(), "8");
        assert_eq!(driver(None, Some(""), Some("Prost")).label(), "8");
    }
}
