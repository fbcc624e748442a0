use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{profiledb::ProfileExt, propertydb::PropertyExt},
    dtos::propertydtos::{PropertyDetailDto, SearchQueryDto},
    error::{ErrorMessage, HttpError},
    service::{
        geocoding::{format_full_address, resolve_coordinates},
        search::filter_and_sort,
    },
    AppState,
};

const FEATURED_LIMIT: i64 = 6;

pub fn property_handler() -> Router {
    Router::new()
        .route("/", get(search_properties))
        .route("/featured", get(get_featured_properties))
        .route("/:property_id", get(get_property_detail))
}

/// Active listings run through the in-memory filter/sort engine. With no
/// query parameters this is just the full active list, newest first.
pub async fn search_properties(
    Query(query_params): Query<SearchQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(HttpError::validation)?;

    let properties = app_state
        .db_client
        .get_active_properties()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let sort = query_params.sort.unwrap_or_default();
    let mut results = filter_and_sort(properties, &query_params.filters(), sort);

    if let Some(limit) = query_params.limit {
        results.truncate(limit);
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "results": results.len(),
        "data": {
            "properties": results
        }
    })))
}

pub async fn get_featured_properties(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state
        .db_client
        .get_featured_properties(FEATURED_LIMIT)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "results": properties.len(),
        "data": {
            "properties": properties
        }
    })))
}

pub async fn get_property_detail(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    let agent = match property.agent_id {
        Some(agent_id) => app_state
            .db_client
            .get_profile_by_user(agent_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?,
        None => None,
    };

    let coordinates = resolve_coordinates(
        property.latitude,
        property.longitude,
        Some(property.city.as_str()),
    );
    let full_address = format_full_address(
        Some(property.address.as_str()),
        Some(property.city.as_str()),
        Some(property.state.as_str()),
        property.zip_code.as_deref(),
    );

    let detail = PropertyDetailDto {
        property,
        full_address,
        coordinates,
        agent,
    };

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property": detail
        }
    })))
}
