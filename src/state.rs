use crate::config::settings::AppConfig;
use crate::infrastructure::transcoder::Transcoder;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub transcoder: Arc<dyn Transcoder>,
}

impl AppState {
    pub fn new(config: AppConfig, transcoder: Arc<dyn Transcoder>) -> Self {
        Self { config, transcoder }
    }
}
