use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        agents::agents_handler, chat::chat_handler, favorites::favorites_handler,
        listings::listings_handler, properties::property_handler, users::users_handler,
        visits::visits_handler,
    },
    middleware::auth,
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/properties", property_handler())
        .nest("/agents", agents_handler())
        .nest("/chat", chat_handler())
        .nest(
            "/listings",
            listings_handler().layer(middleware::from_fn(auth)),
        )
        .nest(
            "/favorites",
            favorites_handler().layer(middleware::from_fn(auth)),
        )
        .nest("/visits", visits_handler().layer(middleware::from_fn(auth)))
        .nest("/users", users_handler().layer(middleware::from_fn(auth)))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
