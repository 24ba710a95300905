// src/presentation/http/routes.rs
use crate::presentation::http::controllers::polls;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/polls", get(polls::index))
        .route("/polls/{id}", get(polls::detail))
        .route("/polls/{id}/results", get(polls::results))
        .route("/polls/{id}/vote", post(polls::vote))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
