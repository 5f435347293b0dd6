use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use sqlx::SqlitePool;

/// Drops the table, recreates it and reloads the sample data. Development
/// convenience only, never expose this in production.
#[tracing::instrument(name = "Reset database.", skip(pool))]
#[post("")]
pub async fn item(pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    db::store::reset(pool.get_ref()).await.map_err(|err| {
        tracing::error!("Failed to reset database: {:?}", err);
        JsonResponse::<models::Product>::internal_server_error()
    })?;

    db::store::seed(pool.get_ref()).await.map_err(|err| {
        tracing::error!("Failed to seed database: {:?}", err);
        JsonResponse::<models::Product>::internal_server_error()
    })?;

    Ok(JsonResponse::<models::Product>::build()
        .set_message("database reset and seeded with sample data")
        .ok())
}
