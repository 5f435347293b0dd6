use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Default handler for anything no route matched.
pub async fn handler(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "error": "endpoint not found",
        "path": req.path(),
    }))
}
