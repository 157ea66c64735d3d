pub mod app_state;
pub mod browser;
pub mod cloner;
pub mod config;
pub mod error;
pub mod handlers;
pub mod platform;
pub mod routes;

pub use error::{RepodockError, Result};
