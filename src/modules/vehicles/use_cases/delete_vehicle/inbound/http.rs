use axum::{extract::State, http::StatusCode};
use tracing::{info, warn};

use crate::shell::errors::ApiError;
use crate::shell::http::ItemId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, ApiError> {
    state.vehicles.delete(&id).await.map_err(|err| {
        warn!(%err, "delete failed");
        ApiError::NotFound("Car not found on deleting")
    })?;
    info!(%id, "vehicle removed");
    Ok(StatusCode::OK)
}
