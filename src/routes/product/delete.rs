use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Delete product.", skip(pool))]
#[delete("/{id}")]
pub async fn item(path: web::Path<(i64,)>, pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::product::fetch(pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())?
        .ok_or_else(|| JsonResponse::<models::Product>::not_found("product not found"))?;

    // A row that vanished between the fetch and the delete is still a no-op,
    // not an error.
    db::product::delete(pool.get_ref(), id)
        .await
        .map(|_deleted| {
            JsonResponse::<models::Product>::build()
                .set_message("product deleted successfully")
                .ok()
        })
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())
}
