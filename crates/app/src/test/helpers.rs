//! Test Helpers

use rust_decimal::Decimal;

use crate::domain::products::{category::Category, data::NewProduct};

pub(crate) fn new_product(name: &str, category: Category, available: bool) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: Some(format!("A {name}")),
        price: Decimal::new(1250, 2),
        available,
        category,
    }
}
