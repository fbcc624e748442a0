use std::sync::Arc;

use axum::{response::IntoResponse, routing::post, Extension, Json, Router};
use validator::Validate;

use crate::{
    dtos::chatdtos::{ChatRequestDto, ChatResponseDto},
    error::HttpError,
    service::chat_relay::{fallback_message, ChatContext},
    AppState,
};

pub fn chat_handler() -> Router {
    Router::new().route("/", post(chat))
}

/// Relay one message to the completion provider. Provider failures never
/// surface as errors here: the client always gets a 200 with either the
/// model's reply or a canned fallback.
pub async fn chat(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(HttpError::validation)?;

    let context = ChatContext {
        budget: body.budget,
        city: body.city,
        property_type: body.property_type,
        history: body.history,
    };

    let response = match app_state.chat_relay.relay(&body.message, &context).await {
        Ok(reply) => ChatResponseDto {
            reply,
            fallback: false,
        },
        Err(e) => {
            tracing::warn!("chat relay failed: {}", e);
            ChatResponseDto {
                reply: fallback_message(&e).to_string(),
                fallback: true,
            }
        }
    };

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": response
    })))
}
