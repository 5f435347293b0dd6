use crate::db;
use crate::forms::ProductPayload;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, HttpMessage, HttpRequest, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Add product.", skip(body, pool))]
#[post("")]
pub async fn item(
    req: HttpRequest,
    body: web::Bytes,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let payload = ProductPayload::parse(Some(req.content_type()), &body);
    let product: models::Product = (&payload).into();

    let errors = product.errors();
    if !errors.is_empty() {
        tracing::debug!("Invalid product payload: {:?}", errors);
        return Err(JsonResponse::<models::Product>::unprocessable_entity(
            errors,
        ));
    }

    db::product::insert(pool.get_ref(), product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_item(product)
                .set_message("product created successfully")
                .created()
        })
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())
}
