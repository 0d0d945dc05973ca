//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::data::ProductPatch;

use crate::{
    extensions::*,
    products::{
        errors::{into_status_error, validation_error},
        request::ProductRequest,
        response::ProductResponse,
    },
    state::State,
};

/// Update Product Handler
///
/// Merges the supplied fields into the stored product. Omitted fields are left
/// unchanged and `"description": null` clears the description.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product document"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: ProductRequest = req.json_payload().await?;
    let patch = ProductPatch::try_from(request).map_err(|error| validation_error(&error))?;

    let updated = state
        .app
        .products
        .update_product(id.into_inner().into(), patch)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
