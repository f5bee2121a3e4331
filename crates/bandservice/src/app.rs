use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        artists::{
            create_artist, delete_artist, get_artist, list_artists, list_artists_by_band,
            update_artist,
        },
        bands::{create_band, delete_band, get_band, list_bands, update_band},
        health::{healthz, livez},
        persons::{create_person, delete_person, get_person, list_persons, update_person},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // Person routes
        .route(
            "/persons",
            get(list_persons).post(create_person).put(update_person),
        )
        .route("/persons/{sort_id}", get(get_person).delete(delete_person))
        // Band routes
        .route("/bands", get(list_bands).post(create_band).put(update_band))
        .route("/bands/{sort_id}", get(get_band).delete(delete_band))
        // Artist routes
        .route(
            "/artists",
            get(list_artists).post(create_artist).put(update_artist),
        )
        .route("/artists/{sort_id}", get(get_artist).delete(delete_artist))
        .route("/artists/band/{band_sort_id}", get(list_artists_by_band))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
