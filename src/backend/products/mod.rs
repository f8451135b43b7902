pub mod handlers;
pub mod repo;

use axum::Router;

use crate::backend::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::read_routes())
}
