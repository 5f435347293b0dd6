use crate::models;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::Instrument;

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products ORDER BY id DESC")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id.");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE id = ?1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch product {}, error: {:?}", id, e);
                Err("Could not fetch data".to_string())
            }
        })
}

/// Inserts a validated product, stamping both timestamps. Callers are
/// responsible for running validation first; an invalid record must never
/// reach this point.
pub async fn insert(
    pool: &SqlitePool,
    mut product: models::Product,
) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database.");
    let now = Utc::now();
    sqlx::query(
        r#"
        INSERT INTO products (name, description, price, quantity, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?5)
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.quantity)
    .bind(now)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(move |result| {
        product.id = Some(result.last_insert_rowid());
        product.created_at = Some(now);
        product.updated_at = Some(now);
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Rewrites the mutable columns of a persisted product and refreshes
/// `updated_at`.
pub async fn update(
    pool: &SqlitePool,
    mut product: models::Product,
) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Updating product.");
    let now = Utc::now();
    sqlx::query(
        r#"
        UPDATE products
        SET name = ?1, description = ?2, price = ?3, quantity = ?4, updated_at = ?5
        WHERE id = ?6
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.quantity)
    .bind(now)
    .bind(product.id)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(move |_| {
        product.updated_at = Some(now);
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

/// Deletes by id. Returns false when the row was already gone, which is a
/// no-op rather than an error.
#[tracing::instrument(name = "Delete product.", skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, String> {
    sqlx::query("DELETE FROM products WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product {}: {:?}", id, err);
            "Failed to delete".to_string()
        })
}

/// Case-insensitive substring match on name or description. No defined
/// ordering, rows come back in store order.
pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Search products.");
    let pattern = format!("%{}%", query.to_lowercase());
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT * FROM products
        WHERE LOWER(name) LIKE ?1 OR LOWER(description) LIKE ?1
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to search products, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn count(pool: &SqlitePool) -> Result<i64, String> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}
