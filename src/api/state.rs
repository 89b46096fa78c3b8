use std::sync::Arc;

use crate::core::AppConfig;
use crate::google::CalendarService;

/// Read-only state shared by every request. There is nothing mutable
/// here so no lock is needed.
pub struct AppState {
    pub config: AppConfig,
    pub calendar: Arc<dyn CalendarService>,
}

impl AppState {
    pub fn new(config: AppConfig, calendar: Arc<dyn CalendarService>) -> Self {
        Self { config, calendar }
    }
}
