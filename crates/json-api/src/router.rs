//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{healthcheck, index_page, observability, products, state::State};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Product routes, shared by the server and the OpenAPI document.
fn api_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}

/// Full application router with middleware, docs and the admin page.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let api = api_router();

    let doc = OpenApi::new("Product Catalog API", env!("CARGO_PKG_VERSION")).merge_router(&api);

    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(state))
        .get(index_page::handler)
        .push(api)
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}
