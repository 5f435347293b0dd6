use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use serde_json::json;
use sqlx::SqlitePool;

/// API metadata plus a live product count.
#[tracing::instrument(name = "API index.", skip(pool))]
#[get("/")]
pub async fn index(pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    let total = db::product::count(pool.get_ref())
        .await
        .map_err(|_err| JsonResponse::<models::Product>::internal_server_error())?;

    Ok(web::Json(json!({
        "success": true,
        "message": "Product API - RESTful CRUD",
        "version": "1.0.0",
        "endpoints": {
            "products": {
                "list": "GET /products",
                "get": "GET /products/:id",
                "create": "POST /products",
                "update": "PUT /products/:id",
                "delete": "DELETE /products/:id",
                "search": "GET /search?q=term"
            }
        },
        "total_products": total,
    })))
}
