use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, routes};

async fn root() -> Json<Value> {
    Json(json!({ "message": "Bem-vindo ao Check Tarefas!" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(routes::health::health_check))
        .merge(routes::empresas::router())
        .merge(routes::tarefas::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
