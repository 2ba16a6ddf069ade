use crate::domain::model::{AlumniRecord, FilterCriteria, OutputFormat};
use crate::utils::error::Result;

/// Supplies the roster once; the directory owns what it returns.
pub trait RosterSource {
    fn name(&self) -> &str;
    fn load(&self) -> Result<Vec<AlumniRecord>>;
}

pub trait ConfigProvider {
    /// `None` selects the built-in roster.
    fn roster_path(&self) -> Option<&str>;
    fn default_criteria(&self) -> FilterCriteria;
    fn output_format(&self) -> OutputFormat;
}
