use crate::modules::vehicles::core::repository::VehicleRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
}
