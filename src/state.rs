use crate::{config::AppConfig, services::trips::TripService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub service: TripService,
}

impl AppState {
    pub fn new(config: AppConfig, service: TripService) -> Self {
        Self { config, service }
    }
}
