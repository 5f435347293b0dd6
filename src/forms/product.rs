use crate::models;
use serde_derive::{Deserialize, Serialize};

/// Request body accepted by POST /products and PUT /products/{id}.
///
/// Every field is optional: on create the missing ones fall back to the
/// entity defaults and validation reports what is actually required; on
/// update only the fields present in the payload overwrite the record.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPayload {
    /// Decodes a raw request body.
    ///
    /// The body is only interpreted when the request declares
    /// `Content-Type: application/json`; anything else, including malformed
    /// JSON, degrades to an empty payload instead of a parse error.
    pub fn parse(content_type: Option<&str>, body: &[u8]) -> Self {
        let is_json = content_type
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Self::default();
        }

        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Overwrites the fields present in the payload, leaving the rest of the
    /// record untouched. An explicit empty string or zero still counts as
    /// present.
    pub fn apply_to(&self, product: &mut models::Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            product.price = Some(price);
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}

impl From<&ProductPayload> for models::Product {
    fn from(payload: &ProductPayload) -> Self {
        models::Product {
            id: None,
            name: payload.name.clone().unwrap_or_default(),
            description: payload.description.clone(),
            price: payload.price,
            quantity: payload.quantity.unwrap_or(0),
            created_at: None,
            updated_at: None,
        }
    }
}
