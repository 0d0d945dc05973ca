//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Bad, missing or malformed product input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    /// A required key was absent from the document.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A key held a JSON value of the wrong type.
    #[error("invalid type for field {field}: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// The category name is not one of [`Category::ALL`](super::category::Category::ALL).
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The name is empty or only whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// The price is below zero.
    #[error("price must not be negative")]
    NegativePrice,

    /// The price has more than two decimal places.
    #[error("price must have at most two decimal places")]
    PriceTooPrecise,

    /// The price does not fit the stored precision.
    #[error("price must be less than 1000000000000")]
    PriceTooLarge,
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("invalid product: {0}")]
    Validation(#[from] DataValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
