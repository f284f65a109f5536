use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::handlers;
use crate::openapi;

/// Shared application state: the resolved configuration, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn db_path(&self) -> &Path {
        &self.config.db_path
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/config", get(handlers::get_config))
        .route("/openapi.json", get(openapi::openapi_spec))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::not_found)
        // CORS stays permissive, the service fronts local development UIs
        .layer(CorsLayer::permissive())
        .with_state(state)
}
