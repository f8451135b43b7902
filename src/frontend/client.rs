use serde::Deserialize;
use thiserror::Error;

/// Product row as served by the backend. The frontend only ever decodes it,
/// so this stays a local DTO rather than sharing types across the HTTP
/// boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
}

/// One fresh fetch per call; nothing is cached between page loads.
pub async fn fetch_products(
    http: &reqwest::Client,
    backend_host: &str,
) -> Result<Vec<Product>, FetchError> {
    let url = format!("http://{backend_host}/api/products");
    let resp = http.get(&url).send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status()));
    }
    let products = resp.json::<Vec<Product>>().await?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use std::net::SocketAddr;

    async fn spawn_stub(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port should bind");
        let addr = listener.local_addr().expect("local addr should resolve");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub should run");
        });
        addr
    }

    #[tokio::test]
    async fn decodes_products_from_a_healthy_backend() {
        let addr = spawn_stub(Router::new().route(
            "/api/products",
            get(|| async {
                Json(serde_json::json!([
                    { "id": 1, "name": "ノートPC", "price": 120000, "stock": 10 },
                    { "id": 2, "name": "マウス", "price": 3000, "stock": 50 },
                ]))
            }),
        ))
        .await;

        let http = reqwest::Client::new();
        let products = fetch_products(&http, &addr.to_string())
            .await
            .expect("fetch should succeed");
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "マウス");
        assert_eq!(products[1].price, 3_000);
        assert_eq!(products[1].stock, 50);
    }

    #[tokio::test]
    async fn non_2xx_response_is_a_status_error() {
        let addr = spawn_stub(Router::new().route(
            "/api/products",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let http = reqwest::Client::new();
        let err = fetch_products(&http, &addr.to_string())
            .await
            .expect_err("fetch should fail");
        match err {
            FetchError::Status(status) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_http_error() {
        let http = reqwest::Client::new();
        let err = fetch_products(&http, "127.0.0.1:9")
            .await
            .expect_err("fetch should fail");
        assert!(matches!(err, FetchError::Http(_)));
    }
}
