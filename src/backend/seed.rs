use sqlx::SqlitePool;
use tracing::info;

use crate::backend::products::repo;

/// Inserts the demo catalog. Runs on every startup with no existence check,
/// so each restart against the same database adds the rows again.
pub async fn run(db: &SqlitePool) -> anyhow::Result<()> {
    let laptop = repo::insert(db, "ノートPC", 120_000, 10).await?;
    let mouse = repo::insert(db, "マウス", 3_000, 50).await?;
    info!(laptop_id = laptop.id, mouse_id = mouse.id, "seeded product catalog");
    Ok(())
}
