use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::{
    clone_form_handler, clone_query_handler, list_form_handler, list_query_handler,
};

pub fn router(state: AppState) -> Router {
    // Credentials are allowed, so the wildcard origin has to be
    // reflected instead of sent literally.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/list", get(list_query_handler).post(list_form_handler))
        .route("/clone", get(clone_query_handler).post(clone_form_handler))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
