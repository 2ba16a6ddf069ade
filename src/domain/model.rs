use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One alumnus as supplied by the roster source. Never mutated by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub name: String,
    pub batch: i32,
    pub location: String,
    pub profession: String,
    #[serde(default)]
    pub avatar: String,
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an alumni id as text or a number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<String, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }
}

// JSON rosters use numeric ids as often as strings. Text-only formats must
// go through `deserialize_string` instead so "007" stays "007".
fn id_from_text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IdVisitor)
}

/// User input driving the directory filter. `Default` is the all-unset state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    /// Raw selector value, compared against the record's batch as text.
    #[serde(default)]
    pub selected_batch: Option<String>,
    #[serde(default)]
    pub selected_profession: Option<String>,
}

impl FilterCriteria {
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_batch(mut self, batch: i32) -> Self {
        self.selected_batch = Some(batch.to_string());
        self
    }

    pub fn with_batch_selector(mut self, selector: impl Into<String>) -> Self {
        self.selected_batch = Some(selector.into());
        self
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.selected_profession = Some(profession.into());
        self
    }

    /// Batch selection with the empty selector value folded into "unset".
    pub fn batch(&self) -> Option<&str> {
        self.selected_batch.as_deref().filter(|batch| !batch.is_empty())
    }

    /// Profession selection with the empty selector value folded into "unset".
    pub fn profession(&self) -> Option<&str> {
        self.selected_profession
            .as_deref()
            .filter(|profession| !profession.is_empty())
    }

    pub fn is_unset(&self) -> bool {
        self.search_term.is_empty() && self.batch().is_none() && self.profession().is_none()
    }
}

/// Values offered by the batch and profession selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub batches: Vec<i32>,
    pub professions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["table", "json", "csv"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}', expected one of: {}",
                other,
                OutputFormat::NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_numeric_and_text_ids() {
        let numeric: AlumniRecord = serde_json::from_str(
            r#"{"id": 7, "name": "Sneha Roy", "batch": 2005, "location": "Bangalore, KA", "profession": "Product Designer", "avatar": ""}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, "7");

        let text: AlumniRecord = serde_json::from_str(
            r#"{"id": "a-7", "name": "Sneha Roy", "batch": 2005, "location": "Bangalore, KA", "profession": "Product Designer"}"#,
        )
        .unwrap();
        assert_eq!(text.id, "a-7");
        assert_eq!(text.avatar, "");
    }

    #[test]
    fn test_json_ids_keep_their_text() {
        let json = r#"[
            {"id": 1.5, "name": "A", "batch": 1998, "location": "Kolkata, WB", "profession": "Cardiologist"},
            {"id": true, "name": "B", "batch": 1998, "location": "Kolkata, WB", "profession": "Cardiologist"},
            {"id": "007", "name": "C", "batch": 1998, "location": "Kolkata, WB", "profession": "Cardiologist"}
        ]"#;
        let records: Vec<AlumniRecord> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1.5", "true", "007"]);
    }

    #[test]
    fn test_batch_selector_keeps_raw_value() {
        assert_eq!(FilterCriteria::default().with_batch(2005).batch(), Some("2005"));
        assert_eq!(FilterCriteria::default().with_batch_selector("abc").batch(), Some("abc"));
        assert!(FilterCriteria::default().with_batch_selector("").is_unset());
    }

    #[test]
    fn test_empty_profession_counts_as_unset() {
        let criteria = FilterCriteria::default().with_profession("");
        assert_eq!(criteria.profession(), None);
        assert!(criteria.is_unset());
        assert!(!FilterCriteria::default().with_batch(1998).is_unset());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
