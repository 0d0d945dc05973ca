//! Products

pub mod category;
pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::{DataValidationError, ProductsServiceError};
pub use service::*;
