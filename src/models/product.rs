use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    // id is assigned by the database. None means the record was never persisted
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    // price stays optional so "missing" and "non positive" produce separate errors
    pub price: Option<f64>,
    pub quantity: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Collects every validation failure, never stopping at the first one.
    /// The same rules run on create and update.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("name is required".to_string());
        }
        match self.price {
            None => errors.push("price is required".to_string()),
            Some(price) if price <= 0.0 => errors.push("price must be positive".to_string()),
            Some(_) => {}
        }
        if self.quantity < 0 {
            errors.push("quantity must be >= 0".to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
