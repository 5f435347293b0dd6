use actix_web::error::InternalError;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

/// Uniform `{success, ...}` envelope returned by every endpoint. Fields that
/// were never set are left out of the serialized body entirely.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) products: Option<Vec<T>>,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    message: Option<String>,
    query: Option<String>,
    count: Option<usize>,
    product: Option<T>,
    products: Option<Vec<T>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn new() -> Self {
        Self {
            message: None,
            query: None,
            count: None,
            product: None,
            products: None,
        }
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.product = Some(item);
        self
    }

    /// Attaches the list and its length in one go.
    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.count = Some(list.len());
        self.products = Some(list);
        self
    }

    pub(crate) fn set_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub(crate) fn set_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    fn into_response(self, success: bool) -> JsonResponse<T> {
        JsonResponse {
            success,
            message: self.message,
            error: None,
            errors: None,
            query: self.query,
            count: self.count,
            product: self.product,
            products: self.products,
        }
    }

    pub(crate) fn ok(self) -> HttpResponse {
        HttpResponse::Ok().json(self.into_response(true))
    }

    pub(crate) fn created(self) -> HttpResponse {
        HttpResponse::Created().json(self.into_response(true))
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::new()
    }

    fn error_body(error: Option<String>, errors: Option<Vec<String>>) -> JsonResponse<T> {
        JsonResponse {
            success: false,
            message: None,
            error,
            errors,
            query: None,
            count: None,
            product: None,
            products: None,
        }
    }

    pub(crate) fn not_found(message: &str) -> Error {
        let body = Self::error_body(Some(message.to_string()), None);
        InternalError::from_response(message.to_string(), HttpResponse::NotFound().json(body))
            .into()
    }

    pub(crate) fn bad_request(message: &str) -> Error {
        let body = Self::error_body(Some(message.to_string()), None);
        InternalError::from_response(message.to_string(), HttpResponse::BadRequest().json(body))
            .into()
    }

    pub(crate) fn unprocessable_entity(errors: Vec<String>) -> Error {
        let body = Self::error_body(None, Some(errors));
        InternalError::from_response(
            "validation failed".to_string(),
            HttpResponse::UnprocessableEntity().json(body),
        )
        .into()
    }

    // The client always gets the generic message; the underlying cause is
    // logged where the failure happened.
    pub(crate) fn internal_server_error() -> Error {
        let body = Self::error_body(Some("internal server error".to_string()), None);
        InternalError::from_response(
            "internal server error".to_string(),
            HttpResponse::InternalServerError().json(body),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    #[test]
    fn unset_fields_are_omitted() {
        let response = JsonResponse::<models::Product>::build()
            .set_message("ok")
            .into_response(true);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "ok");
        assert!(json.get("product").is_none());
        assert!(json.get("products").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn list_carries_its_count() {
        let products = vec![models::Product::default(), models::Product::default()];
        let response = JsonResponse::build().set_list(products).into_response(true);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["count"], 2);
        assert_eq!(json["products"].as_array().unwrap().len(), 2);
    }
}
