use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use tracing::{debug, error, info};

use crate::modules::vehicles::core::vehicle::VehicleDraft;
use crate::shell::errors::ApiError;
use crate::shell::http::item_location;
use crate::shell::state::AppState;

// The body is decoded by hand so the outcome does not depend on Content-Type.
pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let draft = VehicleDraft::from_json(&body).map_err(|err| {
        debug!(error = %err, "create payload rejected");
        ApiError::InvalidPayload
    })?;

    let vehicle = state.vehicles.create(draft).await.map_err(|err| {
        error!(%err, "create failed");
        ApiError::Internal("No identifiers left")
    })?;
    info!(id = %vehicle.id, "vehicle registered");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, item_location(&vehicle.id))],
    ))
}
