use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/components",
            get(handlers::components::list_components)
                .post(handlers::components::create_component),
        )
        .route(
            "/components/:component_id",
            get(handlers::components::get_component)
                .put(handlers::components::update_component)
                .delete(handlers::components::delete_component),
        )
        .route(
            "/component-supplier",
            post(handlers::associations::create_link),
        )
        .route(
            "/component-supplier/:component_id/:supplier_id",
            delete(handlers::associations::delete_link),
        )
}
