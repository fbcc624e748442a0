use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use validator::Validate;

use crate::{
    db::{bookingdb::VisitExt, profiledb::ProfileExt, propertydb::PropertyExt},
    dtos::bookingdtos::BookVisitDto,
    error::{ErrorMessage, HttpError},
    middleware::JWTAuthMiddeware,
    AppState,
};

pub fn visits_handler() -> Router {
    Router::new().route("/", get(get_my_visits).post(book_visit))
}

pub async fn book_visit(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<BookVisitDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(HttpError::validation)?;

    let (visit_date, visit_time) = match (body.visit_date, body.visit_time.clone()) {
        (Some(date), Some(time)) => (date, time),
        _ => return Err(HttpError::bad_request("Please select date and time")),
    };

    let property = app_state
        .db_client
        .get_property(body.property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::PropertyNotFound.to_string()))?;

    let visit = app_state
        .db_client
        .create_visit(
            user.user_id,
            body.property_id,
            body.visitor_name.trim().to_string(),
            body.visitor_phone,
            visit_date,
            visit_time.clone(),
            body.message,
        )
        .await
        .map_err(|e| {
            tracing::error!("failed to save visit booking: {}", e);
            HttpError::server_error(ErrorMessage::WriteFailed.to_string())
        })?;

    let agent_name = match property.agent_id {
        Some(agent_id) => app_state
            .db_client
            .get_profile_by_user(agent_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?
            .and_then(|profile| profile.full_name),
        None => None,
    };

    let message = format!(
        "Your visit for {} is scheduled for {} at {}. {} will contact you soon.",
        property.title,
        visit_date.format("%B %-d, %Y"),
        visit_time,
        agent_name.as_deref().unwrap_or("The agent"),
    );

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": message,
        "data": {
            "visit": visit
        }
    })))
}

pub async fn get_my_visits(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let visits = app_state
        .db_client
        .get_visits_by_user(user.user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "results": visits.len(),
        "data": {
            "visits": visits
        }
    })))
}
