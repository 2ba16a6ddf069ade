use crate::core::{ConfigProvider, FilterCriteria, OutputFormat};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_one_of, validate_path, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// "builtin" or "file".
    pub source: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub search_term: Option<String>,
    pub batch: Option<i32>,
    pub profession: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl DirectoryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn uses_file_roster(&self) -> bool {
        self.roster.source.as_deref() == Some("file")
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(source) = &self.roster.source {
            validate_one_of("roster.source", source, &["builtin", "file"])?;
        }
        if self.uses_file_roster() {
            let path = validate_required_field("roster.path", &self.roster.path)?;
            validate_path("roster.path", path)?;
        }

        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

impl ConfigProvider for DirectoryConfig {
    fn roster_path(&self) -> Option<&str> {
        if self.uses_file_roster() {
            self.roster.path.as_deref()
        } else {
            None
        }
    }

    fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.defaults.search_term.clone().unwrap_or_default(),
            selected_batch: self.defaults.batch.map(|batch| batch.to_string()),
            selected_profession: self.defaults.profession.clone(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
