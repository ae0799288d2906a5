use std::sync::Arc;

use crate::{config::Config, gateway::Gateway};

#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub gateway: Arc<dyn Gateway>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn Gateway>, config: Config) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }
}
