//! Product response documents.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::ProductRecord;

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,

    /// Product name
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Price as a decimal string, e.g. "12.50"
    pub price: String,

    /// Whether the product can currently be ordered
    pub available: bool,

    /// Category name, e.g. "FOOD"
    pub category: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            available: product.available,
            category: product.category.to_string(),
        }
    }
}
