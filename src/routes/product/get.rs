use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "List products.", skip(pool))]
#[get("")]
pub async fn list(pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    db::product::fetch_all(pool.get_ref())
        .await
        .map(|products| JsonResponse::build().set_list(products).ok())
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())
}

#[tracing::instrument(name = "Get product.", skip(pool))]
#[get("/{id}")]
pub async fn item(path: web::Path<(i64,)>, pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::product::fetch(pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())
        .and_then(|product| match product {
            Some(product) => Ok(JsonResponse::build().set_item(product).ok()),
            None => Err(JsonResponse::<models::Product>::not_found(
                "product not found",
            )),
        })
}
