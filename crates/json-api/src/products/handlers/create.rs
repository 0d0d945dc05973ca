//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use catalog_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{
        errors::{into_status_error, validation_error},
        request::ProductRequest,
        response::ProductResponse,
    },
    state::State,
};

/// Create Product Handler
///
/// Expects a JSON product document with `name`, `price`, `available` and
/// `category`; `description` is optional.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product document"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: ProductRequest = req.json_payload().await?;
    let product = NewProduct::try_from(request).map_err(|error| validation_error(&error))?;

    let created = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
