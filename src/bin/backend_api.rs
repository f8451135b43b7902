use shopfront::backend::{app, db, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    shopfront::logging::init();

    let state = db::AppState::init().await?;
    db::ensure_schema(&state.db).await?;
    // Seeding completes before the listener binds, so the first request
    // already sees the demo rows.
    seed::run(&state.db).await?;

    let app = app::build_app(state);
    app::serve(app).await
}
