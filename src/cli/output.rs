//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::StoreError;

/// Map store errors to a string for CLI output.
pub fn map_error(e: &StoreError) -> String {
    match e {
        StoreError::NotConfigured => format!("{} (or pass --root)", e),
        _ => e.to_string(),
    }
}
