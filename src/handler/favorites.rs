use std::sync::Arc;

use axum::{response::IntoResponse, routing::{get, post}, Extension, Json, Router};

use crate::{
    db::{favoritedb::FavoriteExt, propertydb::PropertyExt},
    dtos::propertydtos::{ToggleFavoriteDto, ToggleFavoriteResponseDto},
    error::{ErrorMessage, HttpError},
    middleware::JWTAuthMiddeware,
    AppState,
};

pub fn favorites_handler() -> Router {
    Router::new()
        .route("/", get(get_favorites))
        .route("/toggle", post(toggle_favorite))
}

pub async fn get_favorites(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state
        .db_client
        .get_favorite_properties(user.user_id)
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

/// Save when unsaved, unsave when saved. The write is keyed on
/// (user, property) so repeating a request cannot double-save.
pub async fn toggle_favorite(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<ToggleFavoriteDto>,
) -> Result<impl IntoResponse, HttpError> {
    let existing = app_state
        .db_client
        .get_favorite(user.user_id, body.property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let favorited = if existing.is_some() {
        app_state
            .db_client
            .remove_favorite(user.user_id, body.property_id)
            .await
            .map_err(|e| {
                tracing::error!("failed to remove favorite: {}", e);
                HttpError::server_error(ErrorMessage::WriteFailed.to_string())
            })?;
        false
    } else {
        app_state
            .db_client
            .get_property(body.property_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?
            .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

        app_state
            .db_client
            .add_favorite(user.user_id, body.property_id)
            .await
            .map_err(|e| {
                tracing::error!("failed to add favorite: {}", e);
                HttpError::server_error(ErrorMessage::WriteFailed.to_string())
            })?;
        true
    };

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": ToggleFavoriteResponseDto {
            property_id: body.property_id,
            favorited,
        }
    })))
}
