//! End-to-end flows through the full router.

use salvo::{
    http::StatusCode,
    test::{ResponseExt, TestClient},
};
use serde_json::{Value, json};
use testresult::TestResult;

use crate::{healthcheck::HealthResponse, products::response::ProductResponse, test_helpers::ScenarioContext};

const BASE: &str = "http://example.com";

fn fedora() -> Value {
    json!({
        "name": "Fedora",
        "description": "A red hat",
        "price": "12.50",
        "available": true,
        "category": "CLOTHS",
    })
}

fn product_document(name: &str, category: &str, available: bool) -> Value {
    json!({
        "name": name,
        "description": format!("A {name}"),
        "price": "4.20",
        "available": available,
        "category": category,
    })
}

async fn create(context: &ScenarioContext, document: &Value) -> TestResult<ProductResponse> {
    let mut res = TestClient::post(format!("{BASE}/products"))
        .json(document)
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::CREATED), "create failed");

    Ok(res.take_json().await?)
}

#[tokio::test]
async fn create_returns_product_and_location() -> TestResult {
    let context = ScenarioContext::new();

    let mut res = TestClient::post(format!("{BASE}/products"))
        .json(&fedora())
        .send(&context.service)
        .await;

    let body: ProductResponse = res.take_json().await?;
    let location = res
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    assert_eq!(res.status_code, Some(StatusCode::CREATED));
    assert_eq!(location, Some(format!("/products/{}", body.id)));
    assert_eq!(body.name, "Fedora");
    assert_eq!(body.description.as_deref(), Some("A red hat"));
    assert_eq!(body.price, "12.50");
    assert!(body.available);
    assert_eq!(body.category, "CLOTHS");

    Ok(())
}

#[tokio::test]
async fn unknown_product_is_not_found() -> TestResult {
    let context = ScenarioContext::new();

    let res = TestClient::get(format!("{BASE}/products/0"))
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

    Ok(())
}

#[tokio::test]
async fn list_returns_every_product() -> TestResult {
    let context = ScenarioContext::new();

    for index in 0..5 {
        create(&context, &product_document(&format!("Item {index}"), "FOOD", true)).await?;
    }

    let mut res = TestClient::get(format!("{BASE}/products"))
        .send(&context.service)
        .await;

    let body: Vec<ProductResponse> = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(body.len(), 5);

    Ok(())
}

#[tokio::test]
async fn list_filters_by_name() -> TestResult {
    let context = ScenarioContext::new();

    create(&context, &product_document("Hat", "CLOTHS", true)).await?;
    create(&context, &product_document("Shoes", "CLOTHS", true)).await?;

    let mut res = TestClient::get(format!("{BASE}/products?name=Hat"))
        .send(&context.service)
        .await;

    let body: Vec<ProductResponse> = res.take_json().await?;

    assert_eq!(body.len(), 1);
    assert_eq!(body.first().map(|product| product.name.as_str()), Some("Hat"));

    Ok(())
}

#[tokio::test]
async fn list_combines_filters() -> TestResult {
    let context = ScenarioContext::new();

    create(&context, &product_document("Wrench", "TOOLS", true)).await?;
    create(&context, &product_document("Hammer", "TOOLS", false)).await?;
    create(&context, &product_document("Apple", "FOOD", true)).await?;

    let mut res = TestClient::get(format!("{BASE}/products?category=TOOLS&available=true"))
        .send(&context.service)
        .await;

    let body: Vec<ProductResponse> = res.take_json().await?;
    let names: Vec<&str> = body.iter().map(|product| product.name.as_str()).collect();

    assert_eq!(names, vec!["Wrench"]);

    Ok(())
}

#[tokio::test]
async fn update_changes_only_supplied_fields() -> TestResult {
    let context = ScenarioContext::new();

    let created = create(&context, &fedora()).await?;

    let res = TestClient::put(format!("{BASE}/products/{}", created.id))
        .json(&json!({ "name": "New Name" }))
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));

    let fetched: ProductResponse = TestClient::get(format!("{BASE}/products/{}", created.id))
        .send(&context.service)
        .await
        .take_json()
        .await?;

    assert_eq!(
        fetched,
        ProductResponse {
            name: "New Name".to_owned(),
            ..created
        }
    );

    Ok(())
}

#[tokio::test]
async fn update_of_unknown_product_is_not_found() -> TestResult {
    let context = ScenarioContext::new();

    let res = TestClient::put(format!("{BASE}/products/77"))
        .json(&json!({ "name": "Ghost" }))
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    assert_eq!(context.products.len(), 0);

    Ok(())
}

#[tokio::test]
async fn delete_is_idempotent() -> TestResult {
    let context = ScenarioContext::new();

    let created = create(&context, &fedora()).await?;

    for _ in 0..2 {
        let res = TestClient::delete(format!("{BASE}/products/{}", created.id))
            .send(&context.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    let res = TestClient::get(format!("{BASE}/products/{}", created.id))
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

    Ok(())
}

#[tokio::test]
async fn non_json_bodies_are_unsupported() -> TestResult {
    let context = ScenarioContext::new();

    let res = TestClient::post(format!("{BASE}/products"))
        .raw_form("name=Fedora")
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

    let res = TestClient::post(format!("{BASE}/products"))
        .send(&context.service)
        .await;

    assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));
    assert_eq!(context.products.len(), 0);

    Ok(())
}

#[tokio::test]
async fn invalid_products_are_rejected_and_not_stored() -> TestResult {
    let context = ScenarioContext::new();

    let mut negative = fedora();
    negative["price"] = json!("-1.00");

    let mut nameless = fedora();
    if let Some(document) = nameless.as_object_mut() {
        document.remove("name");
    }

    for document in [negative, nameless] {
        let res = TestClient::post(format!("{BASE}/products"))
            .json(&document)
            .send(&context.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    assert_eq!(context.products.len(), 0);

    Ok(())
}

#[tokio::test]
async fn contexts_do_not_share_products() -> TestResult {
    let first = ScenarioContext::new();
    let second = ScenarioContext::new();

    create(&first, &fedora()).await?;

    assert_eq!(first.products.len(), 1);
    assert_eq!(second.products.len(), 0);

    Ok(())
}

#[tokio::test]
async fn health_and_index_page_are_served() -> TestResult {
    let context = ScenarioContext::new();

    let health: HealthResponse = TestClient::get(format!("{BASE}/health"))
        .send(&context.service)
        .await
        .take_json()
        .await?;

    assert_eq!(health.message, "OK");

    let mut res = TestClient::get(format!("{BASE}/")).send(&context.service).await;
    let page = res.take_string().await?;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert!(page.contains("Product Catalog Administration"));

    Ok(())
}

#[tokio::test]
async fn responses_carry_a_request_id() -> TestResult {
    let context = ScenarioContext::new();

    let res = TestClient::get(format!("{BASE}/health"))
        .add_header("x-request-id", "scenario-42", true)
        .send(&context.service)
        .await;

    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok());

    assert_eq!(request_id, Some("scenario-42"));

    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_product_routes() -> TestResult {
    let context = ScenarioContext::new();

    let document: Value = TestClient::get(format!("{BASE}/api-doc/openapi.json"))
        .send(&context.service)
        .await
        .take_json()
        .await?;

    assert!(document["paths"].get("/products").is_some());
    assert!(document["paths"].get("/products/{id}").is_some());

    Ok(())
}
