use std::sync::Arc;

use crate::cloner::Cloner;
use crate::config::Config;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cloner: Arc<dyn Cloner>,
}

impl AppState {
    pub fn new(config: Config, cloner: Arc<dyn Cloner>) -> Self {
        Self {
            config: Arc::new(config),
            cloner,
        }
    }
}
