use axum::{
    Router,
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
    routing::{MethodRouter, get},
};

use crate::modules::vehicles::use_cases::create_vehicle::inbound::http as create_http;
use crate::modules::vehicles::use_cases::delete_vehicle::inbound::http as delete_http;
use crate::modules::vehicles::use_cases::get_vehicle::inbound::http as get_http;
use crate::modules::vehicles::use_cases::list_vehicles::inbound::http as list_http;
use crate::modules::vehicles::use_cases::update_vehicle::inbound::http as update_http;
use crate::shell::errors::method_not_allowed;
use crate::shell::state::AppState;

pub const COLLECTION_PATH: &str = "/cars";
pub const ITEM_PREFIX: &str = "/cars/";

// The catch-all keeps the identifier as the literal rest of the path. It does
// not match an empty rest, so `ITEM_PREFIX` is routed on its own.
const ITEM_PATH: &str = "/cars/{*id}";

/// Identifier of an item request: everything after `/cars/`, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemId(pub String);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if parts.uri.path() == ITEM_PREFIX {
            return Ok(ItemId(String::new()));
        }
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(ItemId(id))
    }
}

// HEAD is claimed explicitly, otherwise axum answers it with the GET handler.
fn collection_routes() -> MethodRouter<AppState> {
    get(list_http::handle)
        .post(create_http::handle)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

fn item_routes() -> MethodRouter<AppState> {
    get(get_http::handle)
        .put(update_http::handle)
        .delete(delete_http::handle)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(COLLECTION_PATH, collection_routes())
        .route(ITEM_PREFIX, item_routes())
        .route(ITEM_PATH, item_routes())
        .with_state(state)
}

pub fn item_location(id: &str) -> String {
    format!("{ITEM_PREFIX}{id}")
}
