//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::debug;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Delete Product Handler
///
/// Deleting a product that does not exist still succeeds.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Id is not an integer"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(id: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    let existed = state
        .app
        .products
        .delete_product(id.into())
        .await
        .map_err(into_status_error)?;

    debug!(product_id = id, existed, "delete product");

    Ok(StatusCode::NO_CONTENT)
}
