use crate::core::{AlumniRecord, Result, RosterSource};
use crate::utils::error::DirectoryError;
use crate::utils::validation::validate_avatar_url;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Csv,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(RosterFormat::Json),
            Some("csv") => Ok(RosterFormat::Csv),
            _ => Err(DirectoryError::InvalidConfigValueError {
                field: "roster.path".to_string(),
                value: path.display().to_string(),
                reason: "Roster file must have a .json or .csv extension".to_string(),
            }),
        }
    }
}

/// Roster read from a JSON array or a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
    name: String,
    format: RosterFormat,
}

impl FileRoster {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = RosterFormat::from_path(&path)?;
        let name = path.display().to_string();
        Ok(Self { path, name, format })
    }

    pub fn format(&self) -> RosterFormat {
        self.format
    }

    fn roster_error(&self, message: impl Into<String>) -> DirectoryError {
        DirectoryError::RosterError {
            source_name: self.name.clone(),
            message: message.into(),
        }
    }
}

impl RosterSource for FileRoster {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<AlumniRecord>> {
        tracing::debug!("Reading roster from {}", self.name);
        let content = fs::read_to_string(&self.path)?;

        let records = match self.format {
            RosterFormat::Json => parse_json(&content).map_err(|e| self.roster_error(e))?,
            RosterFormat::Csv => parse_csv(&content).map_err(|e| self.roster_error(e))?,
        };

        tracing::info!("Loaded {} alumni from {}", records.len(), self.name);
        report_suspect_records(&self.name, &records);
        Ok(records)
    }
}

fn parse_json(content: &str) -> std::result::Result<Vec<AlumniRecord>, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

/// CSV fields are untyped text; the id column is read verbatim so "007"
/// and "7" stay distinct.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    batch: i32,
    location: String,
    profession: String,
    #[serde(default)]
    avatar: String,
}

impl From<CsvRow> for AlumniRecord {
    fn from(row: CsvRow) -> Self {
        AlumniRecord {
            id: row.id,
            name: row.name,
            batch: row.batch,
            location: row.location,
            profession: row.profession,
            avatar: row.avatar,
        }
    }
}

fn parse_csv(content: &str) -> std::result::Result<Vec<AlumniRecord>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(index, row)| {
            row.map(AlumniRecord::from)
                .map_err(|e| format!("record {}: {}", index + 1, e))
        })
        .collect()
}

/// Logs duplicate ids, blank names and unusable avatar URIs. Records are kept as-is.
pub fn report_suspect_records(source_name: &str, records: &[AlumniRecord]) -> usize {
    let mut seen = HashSet::new();
    let mut suspects = 0;

    for record in records {
        if !seen.insert(record.id.as_str()) {
            tracing::warn!("{}: duplicate alumni id '{}'", source_name, record.id);
            suspects += 1;
        }
        if record.name.trim().is_empty() {
            tracing::warn!("{}: alumni '{}' has a blank name", source_name, record.id);
            suspects += 1;
        }
        if !record.avatar.is_empty() {
            if let Err(e) = validate_avatar_url(source_name, &record.id, &record.avatar) {
                tracing::warn!("{}", e);
                suspects += 1;
            }
        }
    }

    suspects
}
