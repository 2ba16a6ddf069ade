#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, FilterCriteria, OutputFormat};

/// Effective settings after layering config file values and CLI overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub roster_path: Option<String>,
    pub criteria: FilterCriteria,
    pub format: OutputFormat,
    pub list_options: bool,
}

impl Settings {
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self {
            roster_path: provider.roster_path().map(str::to_string),
            criteria: provider.default_criteria(),
            format: provider.output_format(),
            list_options: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn roster_path(&self) -> Option<&str> {
        self.roster_path.as_deref()
    }

    fn default_criteria(&self) -> FilterCriteria {
        self.criteria.clone()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
