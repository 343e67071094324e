use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        automoviles::{buscar_auto, list_automoviles},
        conductores::{conductores_sin_auto, list_conductores},
        root::root,
        solitos::list_solitos,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Unmatched paths fall back to static files under `config.public_dir`,
/// where the card-rendering frontend lives when deployed.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // Permissive CORS so the frontend can be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/conductores", get(list_conductores))
        .route("/automoviles", get(list_automoviles))
        .route("/conductoressinauto", get(conductores_sin_auto))
        .route("/solitos", get(list_solitos))
        .route("/auto", get(buscar_auto))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
