//! Product - Catalog Entry
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Rejection message for a create payload with a missing or falsy field
pub const MISSING_FIELDS_MESSAGE: &str = "Product missing one or more fields";

/// Product - a stored catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub media_url: String,
}

/// Validated product fields, not yet assigned an id by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub media_url: String,
}

impl NewProduct {
    /// Extract and validate a create payload.
    ///
    /// All four fields must be present and truthy: `null`, `false`, `0` and
    /// `""` count as missing, so a zero price is rejected along with absent
    /// fields. Numeric strings are accepted as a price; other scalars are
    /// accepted as text.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let field = |key: &str| payload.get(key).filter(|value| is_truthy(value));

        let (Some(name), Some(price), Some(description), Some(media_url)) = (
            field("name"),
            field("price"),
            field("description"),
            field("mediaUrl"),
        ) else {
            return Err(DomainError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(Self {
            name: text_field("name", name)?,
            price: price_field(price)?,
            description: text_field("description", description)?,
            media_url: text_field("mediaUrl", media_url)?,
        })
    }

    /// Attach the id assigned by the store
    pub fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            media_url: self.media_url,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_field(key: &str, value: &Value) -> Result<String, DomainError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(DomainError::Validation(format!(
            "Product {} must be text",
            key
        ))),
    }
}

fn price_field(value: &Value) -> Result<f64, DomainError> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        _ => None,
    }
    .ok_or_else(|| DomainError::Validation("Product price must be a number".to_string()))?;

    // "0" survives the truthiness check as a string but is still a zero price
    if price == 0.0 {
        return Err(DomainError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    Ok(price)
}
