// Adapters layer: concrete roster sources and output rendering.

pub mod render;
pub mod roster;
pub mod sample;

use crate::core::{Result, RosterSource};

/// Picks the roster source for an optional file path.
pub fn roster_source(path: Option<&str>) -> Result<Box<dyn RosterSource>> {
    match path {
        Some(path) => Ok(Box::new(roster::FileRoster::new(path)?)),
        None => Ok(Box::new(sample::BuiltinRoster::new())),
    }
}
