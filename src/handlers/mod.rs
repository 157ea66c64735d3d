mod clone_handler;
mod list_handler;

pub use clone_handler::{clone_form_handler, clone_query_handler, CLONE_SUCCESS_MESSAGE};
pub use list_handler::{list_form_handler, list_query_handler};

use crate::error::RepodockError;
use crate::Result;

/// All request parameters are mandatory and must be non-empty.
fn required(value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RepodockError::InvalidParams),
    }
}
