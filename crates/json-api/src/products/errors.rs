//! Product Errors

use salvo::http::StatusError;
use tracing::{debug, error};

use catalog_app::domain::products::{DataValidationError, ProductsServiceError};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::Validation(source) => validation_error(&source),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Product rejected by the store")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn validation_error(error: &DataValidationError) -> StatusError {
    debug!("invalid product: {error}");

    StatusError::bad_request().brief(format!("Invalid product: {error}"))
}
