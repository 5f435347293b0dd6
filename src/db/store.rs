use crate::configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Opens the backing store. The pool is capped at a single connection: the
/// service shares one handle with the store for its whole lifetime and lets
/// SQLite serialize access.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.connection_string())?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
}

/// Ensures the products table exists. Safe to call on every startup.
pub async fn setup(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema is ready");
    Ok(())
}

/// Drops the products table and recreates it. Destructive, not meant for
/// production deployments.
pub async fn reset(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS products")
        .execute(pool)
        .await?;
    setup(pool).await
}

/// Inserts the fixed sample product set used by demos and tests.
pub async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let samples: [(&str, &str, f64, i64); 5] = [
        ("Notebook Dell", "Notebook Dell Inspiron 15", 3500.00, 10),
        ("Mouse Logitech", "Mouse sem fio", 89.90, 50),
        ("Teclado Mecânico", "Teclado RGB", 450.00, 25),
        ("Monitor LG 24\"", "Monitor Full HD", 800.00, 15),
        ("Webcam Full HD", "Webcam 1080p", 250.00, 30),
    ];

    let now = chrono::Utc::now();
    for (name, description, price, quantity) in samples {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price, quantity, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(quantity)
        .bind(now)
        .execute(pool)
        .await?;
    }

    tracing::info!("Seeded {} sample products", samples.len());
    Ok(())
}

/// Closes the shared handle for clean shutdown.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
}
