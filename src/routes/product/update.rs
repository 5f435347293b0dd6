use crate::db;
use crate::forms::ProductPayload;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, HttpMessage, HttpRequest, Responder, Result};
use sqlx::SqlitePool;

/// Partial update: only the fields present in the payload overwrite the
/// stored record, then the merged record is revalidated in full.
#[tracing::instrument(name = "Update product.", skip(body, pool))]
#[put("/{id}")]
pub async fn item(
    req: HttpRequest,
    path: web::Path<(i64,)>,
    body: web::Bytes,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    let mut product = db::product::fetch(pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())?
        .ok_or_else(|| JsonResponse::<models::Product>::not_found("product not found"))?;

    let payload = ProductPayload::parse(Some(req.content_type()), &body);
    payload.apply_to(&mut product);

    let errors = product.errors();
    if !errors.is_empty() {
        tracing::debug!("Invalid product after merge: {:?}", errors);
        return Err(JsonResponse::<models::Product>::unprocessable_entity(
            errors,
        ));
    }

    db::product::update(pool.get_ref(), product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_item(product)
                .set_message("product updated successfully")
                .ok()
        })
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())
}
