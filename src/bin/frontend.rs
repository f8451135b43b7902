use shopfront::frontend::{app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    shopfront::logging::init();

    let state = AppState::init()?;
    let app = app::build_app(state);
    app::serve(app).await
}
