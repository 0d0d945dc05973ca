//! Product Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;

use crate::{domain::products::category::Category, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Display for ProductRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<Product {} id=[{}]>", self.name, self.id)
    }
}
