use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    db::{profiledb::ProfileExt, propertydb::PropertyExt},
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn agents_handler() -> Router {
    Router::new()
        .route("/", get(get_agents))
        .route("/:agent_id", get(get_agent))
}

pub async fn get_agents(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let agents = app_state
        .db_client
        .get_agent_profiles()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "results": agents.len(),
        "data": {
            "agents": agents
        }
    })))
}

/// Agent profile plus their active listings, for the public directory page.
pub async fn get_agent(
    Path(agent_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = app_state
        .db_client
        .get_profile_by_user(agent_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::AgentProfileNotFound.to_string()))?;

    let listings = app_state
        .db_client
        .get_properties_by_agent(agent_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let active: Vec<_> = listings.into_iter().filter(|p| p.status == "active").collect();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "agent": profile,
            "properties": active
        }
    })))
}
