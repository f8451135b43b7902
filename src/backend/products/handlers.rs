use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, instrument};

use crate::backend::db::AppState;

use super::repo::{self, Product};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    let products = repo::list_all(&state.db).await.map_err(internal)?;
    Ok(Json(products))
}

fn internal(err: anyhow::Error) -> (StatusCode, String) {
    error!(error = %err, "product query failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
