use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

pub async fn insert(
    db: &SqlitePool,
    name: &str,
    price: i64,
    stock: i64,
) -> anyhow::Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, price, stock)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, price, stock
        "#,
    )
    .bind(name)
    .bind(price)
    .bind(stock)
    .fetch_one(db)
    .await?;
    Ok(product)
}

pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, price, stock
        FROM products
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::db::memory_pool;

    #[tokio::test]
    async fn list_on_empty_table_is_empty() {
        let db = memory_pool().await;
        let rows = list_all(&db).await.expect("list should succeed");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids_and_keeps_fields() {
        let db = memory_pool().await;
        let laptop = insert(&db, "ノートPC", 120_000, 10)
            .await
            .expect("insert should succeed");
        let mouse = insert(&db, "マウス", 3_000, 50)
            .await
            .expect("insert should succeed");

        assert_ne!(laptop.id, mouse.id);
        assert_eq!(mouse.name, "マウス");
        assert_eq!(mouse.price, 3_000);
        assert_eq!(mouse.stock, 50);
    }

    #[tokio::test]
    async fn list_returns_rows_in_insertion_order() {
        let db = memory_pool().await;
        insert(&db, "first", 1, 1).await.expect("insert should succeed");
        insert(&db, "second", 2, 2).await.expect("insert should succeed");
        insert(&db, "third", 3, 3).await.expect("insert should succeed");

        let names: Vec<String> = list_all(&db)
            .await
            .expect("list should succeed")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
