use crate::config::toml_config::DirectoryConfig;
use crate::config::Settings;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "alumni-directory")]
#[command(about = "Search and filter the alumni association directory")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Roster file (.json or .csv); the built-in roster is used when omitted
    #[arg(short, long)]
    pub roster: Option<String>,

    /// Case-insensitive text matched against name, location and profession
    #[arg(short, long)]
    pub search: Option<String>,

    /// Graduation year, matched exactly; an empty value clears a configured default
    #[arg(short, long)]
    pub batch: Option<String>,

    /// Exact profession; an empty value clears a configured default
    #[arg(short, long)]
    pub profession: Option<String>,

    /// Print the selectable batches and professions instead of alumni
    #[arg(long)]
    pub list_options: bool,

    /// Output format: table, json or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies command-line overrides.
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                let config = DirectoryConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => DirectoryConfig::default(),
        };
        self.apply_overrides(Settings::from_provider(&file_config))
    }

    pub fn apply_overrides(&self, mut settings: Settings) -> Result<Settings> {
        if let Some(roster) = &self.roster {
            settings.roster_path = Some(roster.clone());
        }
        if let Some(search) = &self.search {
            settings.criteria.search_term = search.clone();
        }
        if let Some(batch) = &self.batch {
            settings.criteria.selected_batch = Some(batch.clone()).filter(|b| !b.is_empty());
        }
        if let Some(profession) = &self.profession {
            settings.criteria.selected_profession =
                Some(profession.clone()).filter(|p| !p.is_empty());
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings.list_options = self.list_options;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(roster) = &self.roster {
            validate_path("roster", roster)?;
        }
        Ok(())
    }
}
