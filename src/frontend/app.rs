use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::frontend::pages;
use crate::frontend::state::AppState;

pub fn build_app(state: AppState) -> Router {
    pages::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "3000".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
