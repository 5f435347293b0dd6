use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde_derive::Deserialize;
use sqlx::SqlitePool;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[tracing::instrument(name = "Search products.", skip(pool))]
#[get("")]
pub async fn list(
    query: web::Query<SearchQuery>,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    // An empty query is rejected before it ever reaches the repository.
    let term = match query.q.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => {
            return Err(JsonResponse::<models::Product>::bad_request(
                "query parameter q is required",
            ))
        }
    };

    db::product::search(pool.get_ref(), term)
        .await
        .map(|products| {
            JsonResponse::build()
                .set_query(term)
                .set_list(products)
                .ok()
        })
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())
}
