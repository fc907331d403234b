use axum::{
    http::{Method, Uri},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod flights;
pub mod health;
pub mod responses;
pub mod state;
pub mod stations;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // Read-only API, open to any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(health::routes())
        .merge(flights::routes())
        .merge(stations::routes())
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        path: uri.to_string(),
        method: method.to_string(),
    }
}
