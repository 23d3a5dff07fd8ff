use axum::{Json, extract::State};
use tracing::warn;

use crate::modules::vehicles::core::vehicle::Vehicle;
use crate::shell::errors::ApiError;
use crate::shell::http::ItemId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<Vehicle>, ApiError> {
    state.vehicles.get(&id).await.map(Json).map_err(|err| {
        warn!(%err, "lookup failed");
        ApiError::NotFound("Car not found")
    })
}
