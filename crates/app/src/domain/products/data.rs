//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::{
    category::Category, errors::DataValidationError, records::ProductRecord,
};

/// Decimal places kept by the `price` column.
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of the `price` column, `NUMERIC(14, 2)`.
// `Decimal::new` is not `const`; these parts encode 1_000_000_000_000 at scale 0.
pub const PRICE_LIMIT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// New Product Data
///
/// Carries no id: the store assigns one on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl NewProduct {
    /// Check the invariants a stored product must hold.
    ///
    /// # Errors
    ///
    /// Returns [`DataValidationError::EmptyName`] for a blank name,
    /// [`DataValidationError::NegativePrice`] for a price below zero, and
    /// [`DataValidationError::PriceTooPrecise`] or
    /// [`DataValidationError::PriceTooLarge`] for a price the store would
    /// round or refuse.
    pub fn validate(&self) -> Result<(), DataValidationError> {
        if self.name.trim().is_empty() {
            return Err(DataValidationError::EmptyName);
        }

        if self.price < Decimal::ZERO {
            return Err(DataValidationError::NegativePrice);
        }

        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(DataValidationError::PriceTooPrecise);
        }

        if self.price >= PRICE_LIMIT {
            return Err(DataValidationError::PriceTooLarge);
        }

        Ok(())
    }
}

impl From<ProductRecord> for NewProduct {
    fn from(record: ProductRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            price: record.price,
            available: record.available,
            category: record.category,
        }
    }
}

/// Product Patch Data
///
/// Only fields that are `Some` are changed. `description` is doubly optional so
/// that an explicit `None` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub available: Option<bool>,
    pub category: Option<Category>,
}

impl ProductPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.available.is_none()
            && self.category.is_none()
    }

    /// Merge the patch over an existing record and validate the result.
    ///
    /// # Errors
    ///
    /// Returns a [`DataValidationError`] when the merged product is invalid.
    pub fn apply(self, record: &ProductRecord) -> Result<NewProduct, DataValidationError> {
        let merged = NewProduct {
            name: self.name.unwrap_or_else(|| record.name.clone()),
            description: self
                .description
                .unwrap_or_else(|| record.description.clone()),
            price: self.price.unwrap_or(record.price),
            available: self.available.unwrap_or(record.available),
            category: self.category.unwrap_or(record.category),
        };

        merged.validate()?;

        Ok(merged)
    }
}

/// Product query filter. Set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub available: Option<bool>,
}

impl ProductFilter {
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.available.is_none()
    }

    /// Whether a record satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.name.as_ref().is_none_or(|name| *name == record.name)
            && self.category.is_none_or(|category| category == record.category)
            && self.available.is_none_or(|available| available == record.available)
    }
}
