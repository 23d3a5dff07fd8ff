use axum::{Json, body::Bytes, extract::State};
use tracing::{debug, info, warn};

use crate::modules::vehicles::core::vehicle::{Vehicle, VehicleDraft};
use crate::shell::errors::ApiError;
use crate::shell::http::ItemId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    body: Bytes,
) -> Result<Json<Vehicle>, ApiError> {
    let draft = VehicleDraft::from_json(&body).map_err(|err| {
        debug!(error = %err, %id, "update payload rejected");
        ApiError::InvalidPayload
    })?;

    let vehicle = state.vehicles.update(&id, draft).await.map_err(|err| {
        warn!(%err, "update failed");
        ApiError::NotFound("Car not found")
    })?;
    info!(%id, "vehicle replaced");

    Ok(Json(vehicle))
}
