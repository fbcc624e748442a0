use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::propertydb::PropertyExt,
    dtos::propertydtos::{CreateListingDto, UpdateListingDto},
    error::{ErrorMessage, HttpError},
    middleware::{role_check, JWTAuthMiddeware},
    models::usermodel::UserRole,
    AppState,
};

/// Agent-only listing management. Every route requires the agent role;
/// updates and deletes additionally require ownership of the row.
pub fn listings_handler() -> Router {
    Router::new()
        .route(
            "/",
            post(create_listing).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Agent])
            })),
        )
        .route(
            "/mine",
            get(get_my_listings).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Agent])
            })),
        )
        .route(
            "/:property_id",
            put(update_listing)
                .delete(delete_listing)
                .layer(middleware::from_fn(|state, req, next| {
                    role_check(state, req, next, vec![UserRole::Agent])
                })),
        )
}

pub async fn create_listing(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<CreateListingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(HttpError::validation)?;

    let property = app_state
        .db_client
        .create_property(user.user_id, body)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Listing published",
        "data": {
            "property": property
        }
    })))
}

pub async fn get_my_listings(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state
        .db_client
        .get_properties_by_agent(user.user_id)
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

pub async fn update_listing(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<UpdateListingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(HttpError::validation)?;

    let property = app_state
        .db_client
        .update_property(property_id, user.user_id, body)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Listing updated",
        "data": {
            "property": property
        }
    })))
}

pub async fn delete_listing(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_property(property_id, user.user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if !deleted {
        return Err(HttpError::not_found(
            ErrorMessage::PropertyNotFound.to_string(),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Listing removed"
    })))
}
