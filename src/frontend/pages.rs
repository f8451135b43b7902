use axum::{extract::State, response::Html, routing::get, Router};
use tracing::{instrument, warn};

use crate::frontend::client::{self, Product};
use crate::frontend::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// A backend failure becomes a message on the page, not an HTTP error; the
/// page itself always renders with 200.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Html<String> {
    match client::fetch_products(&state.http, &state.config.backend_host).await {
        Ok(products) => Html(render_home(
            &products,
            "Backend API から商品データを取得しました!",
        )),
        Err(err) => {
            warn!(error = %err, backend_host = %state.config.backend_host, "product fetch failed");
            Html(render_home(
                &[],
                &format!("Backend API に接続できません: {err}"),
            ))
        }
    }
}

fn render_home(products: &[Product], message: &str) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>商品一覧</title></head>\n<body>\n<h1>商品一覧</h1>\n",
    );
    page.push_str(&format!("<p>{}</p>\n", escape_html(message)));
    if !products.is_empty() {
        page.push_str("<table>\n<tr><th>ID</th><th>商品名</th><th>価格</th><th>在庫</th></tr>\n");
        for p in products {
            page.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                p.id,
                escape_html(&p.name),
                p.price,
                p.stock
            ));
        }
        page.push_str("</table>\n");
    }
    page.push_str("</body>\n</html>\n");
    page
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
