pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{render, roster::FileRoster, roster_source, sample::BuiltinRoster};
pub use crate::config::{toml_config::DirectoryConfig, Settings};
pub use crate::core::{
    directory::AlumniDirectory,
    donation::AmountSelection,
    filter::{filter_roster, matches},
    options::derive_options,
    AlumniRecord, FilterCriteria, FilterOptions, OutputFormat, RosterSource,
};
pub use crate::utils::error::{DirectoryError, Result};
