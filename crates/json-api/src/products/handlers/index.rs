//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::domain::products::{category::Category, data::ProductFilter};

use crate::{
    extensions::*,
    products::{errors::into_status_error, response::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Lists products. `name`, `category` and `available` narrow the result and
/// combine with AND; with none of them every product is returned. An empty
/// value counts as absent.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown category or malformed boolean"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    category: QueryParam<String, false>,
    available: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        name: non_empty(name.into_inner()),
        category: non_empty(category.into_inner())
            .map(|value| value.parse::<Category>())
            .transpose()
            .or_400("could not parse \"category\" query parameter")?,
        available: non_empty(available.into_inner())
            .map(|value| parse_flag(&value))
            .transpose()
            .or_400("could not parse \"available\" query parameter")?,
    };

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true or false, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::MockProductsService;

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_without_query_lists_everything() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(ProductFilter::is_empty)
            .return_once(|_| Ok(vec![make_product(1), make_product(2)]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;
        let ids: Vec<i64> = body.iter().map(|product| product.id).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_combines_query_parameters() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|filter| {
                *filter
                    == ProductFilter {
                        name: Some("Hat".to_owned()),
                        category: Some(Category::Cloths),
                        available: Some(false),
                    }
            })
            .return_once(|_| Ok(vec![]));

        let mut res =
            TestClient::get("http://example.com/products?name=Hat&category=CLOTHS&available=False")
                .send(&make_service(repo))
                .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_query_values_do_not_filter() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(ProductFilter::is_empty)
            .return_once(|_| Ok(vec![make_product(1)]));

        let mut res = TestClient::get("http://example.com/products?name=&category=&available=")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_category_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?category=GADGETS")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_malformed_availability_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?available=maybe")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
