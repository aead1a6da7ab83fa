use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::forecast;
use crate::index;

pub fn create_app() -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/weatherforecast", get(forecast::get_weather_forecast))
        .layer(TraceLayer::new_for_http())
}
