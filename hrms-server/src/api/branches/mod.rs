//! Branch API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/branches/", get(handler::list).post(handler::create))
        .nest("/api/branches", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{id}/", get(handler::get_by_id))
        .route("/update/{id}/", put(handler::update))
        .route("/delete/{id}/", delete(handler::delete))
}
