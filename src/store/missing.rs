//! Missing-value handling shared by every table schema.
//!
//! The source files mark an absent value with `\N`. Any optional field declared with
//! `#[serde(default, deserialize_with = "missing::optional")]` maps that marker, an empty
//! cell, or a value that does not parse into the field's type to `None`.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

pub const MISSING: &str = "\\N";

/// Returns the trimmed cell unless it is the missing marker or blank.
pub fn present(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING {
        None
    } else {
        Some(trimmed)
    }
}

pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = String::deserialize(deserializer)?;
    Ok(present(&raw).and_then(|value| value.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "optional")]
        position: Option<u32>,
        #[serde(default, deserialize_with = "optional")]
        code: Option<String>,
    }

    fn parse(csv_text: &str) -> Vec<Row> {
        csv::Reader::from_reader(csv_text.as_bytes())
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn marker_and_blank_are_absent() {
        let rows = parse("position,code\n\\N,\\N\n,\n");
        assert!(rows.iter().all(|r| r.position.is_none() && r.code.is_none()));
    }

    #[test]
    fn unparseable_number_is_absent() {
        let rows = parse("position,code\nR,HAM\n3,VER\n");
        assert_eq!(rows[0].position, None);
        assert_eq!(rows[0].code.as_deref(), Some("HAM"));
        assert_eq!(rows[1].position, Some(3));
    }

    #[test]
    fn missing_column_defaults_to_absent() {
        let rows = parse("position\n1\n");
        assert_eq!(rows[0].code, None);
    }
}
