//! Product request documents.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use catalog_app::domain::products::{
    DataValidationError,
    category::Category,
    data::{NewProduct, ProductPatch},
};

/// Product document as sent by clients.
///
/// Every field is kept as raw JSON so that absent keys, explicit `null`s and
/// wrongly typed values can each be reported precisely. Unknown keys such as
/// `id` are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProductRequest {
    #[serde(deserialize_with = "present")]
    pub name: Option<Value>,

    #[serde(deserialize_with = "present")]
    pub description: Option<Value>,

    #[serde(deserialize_with = "present")]
    pub price: Option<Value>,

    #[serde(deserialize_with = "present")]
    pub available: Option<Value>,

    #[serde(deserialize_with = "present")]
    pub category: Option<Value>,
}

/// Maps a present key to `Some`, including a present `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl TryFrom<ProductRequest> for NewProduct {
    type Error = DataValidationError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        let product = NewProduct {
            name: text(required("name", request.name)?, "name")?,
            description: request.description.map(optional_text).transpose()?.flatten(),
            price: decimal(required("price", request.price)?)?,
            available: boolean(required("available", request.available)?)?,
            category: category(required("category", request.category)?)?,
        };

        product.validate()?;

        Ok(product)
    }
}

impl TryFrom<ProductRequest> for ProductPatch {
    type Error = DataValidationError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductPatch {
            name: request.name.map(|value| text(value, "name")).transpose()?,
            description: request.description.map(optional_text).transpose()?,
            price: request.price.map(decimal).transpose()?,
            available: request.available.map(boolean).transpose()?,
            category: request.category.map(category).transpose()?,
        })
    }
}

fn required(field: &'static str, value: Option<Value>) -> Result<Value, DataValidationError> {
    value.ok_or(DataValidationError::MissingField(field))
}

fn text(value: Value, field: &'static str) -> Result<String, DataValidationError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(DataValidationError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

fn optional_text(value: Value) -> Result<Option<String>, DataValidationError> {
    match value {
        Value::Null => Ok(None),
        other => text(other, "description").map(Some),
    }
}

fn decimal(value: Value) -> Result<Decimal, DataValidationError> {
    let invalid = DataValidationError::InvalidType {
        field: "price",
        expected: "decimal",
    };

    let literal = match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => return Err(invalid),
    };

    let literal = literal.trim();

    Decimal::from_str(literal)
        .or_else(|_| Decimal::from_scientific(literal))
        .map_err(|_parse| invalid)
}

fn boolean(value: Value) -> Result<bool, DataValidationError> {
    value.as_bool().ok_or(DataValidationError::InvalidType {
        field: "available",
        expected: "boolean",
    })
}

fn category(value: Value) -> Result<Category, DataValidationError> {
    match value {
        Value::String(name) => name.parse(),
        _ => Err(DataValidationError::InvalidType {
            field: "category",
            expected: "string",
        }),
    }
}
