pub mod directory;
pub mod donation;
pub mod filter;
pub mod options;

pub use crate::domain::model::{AlumniRecord, FilterCriteria, FilterOptions, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, RosterSource};
pub use crate::utils::error::Result;
