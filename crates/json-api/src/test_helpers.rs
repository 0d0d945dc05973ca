//! Test helpers.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{
        MockProductsService, ProductsService, ProductsServiceError,
        category::Category,
        data::{NewProduct, ProductFilter, ProductPatch},
        records::{ProductId, ProductRecord},
    },
};

use crate::{router::app_router, state::State};

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: format!("Product {id}"),
        description: Some("A test product".to_owned()),
        price: Decimal::new(1250, 2),
        available: true,
        category: Category::Tools,
    }
}

/// Serve `route` with a mocked products service injected as state.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = State::from_app_context(AppContext::new(Arc::new(products)));

    Service::new(Router::new().hoop(inject(state)).push(route))
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    products: BTreeMap<i64, ProductRecord>,
}

/// Products service backed by a map, for exercising the full router.
#[derive(Debug, Default)]
pub(crate) struct InMemoryProductsService {
    store: Mutex<Store>,
}

impl InMemoryProductsService {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn len(&self) -> usize {
        self.store().products.len()
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn all_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.list_products(ProductFilter::default()).await
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self
            .store()
            .products
            .values()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        Ok(self.store().products.get(&product.into_i64()).cloned())
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn find_products_by_name(
        &self,
        name: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.list_products(ProductFilter::by_name(name)).await
    }

    async fn find_products_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.list_products(ProductFilter::by_availability(available))
            .await
    }

    async fn find_products_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.list_products(ProductFilter::by_category(category))
            .await
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        let mut store = self.store();

        store.next_id += 1;

        let id = store.next_id;

        let record = ProductRecord {
            id: ProductId::from_i64(id),
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
        };

        store.products.insert(id, record.clone());

        Ok(record)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut store = self.store();

        let existing = store
            .products
            .get_mut(&product.into_i64())
            .ok_or(ProductsServiceError::NotFound)?;

        let merged = patch.apply(existing)?;

        existing.name = merged.name;
        existing.description = merged.description;
        existing.price = merged.price;
        existing.available = merged.available;
        existing.category = merged.category;

        Ok(existing.clone())
    }

    async fn delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError> {
        Ok(self
            .store()
            .products
            .remove(&product.into_i64())
            .is_some())
    }
}

/// One isolated catalog plus the full router serving it.
pub(crate) struct ScenarioContext {
    pub(crate) products: Arc<InMemoryProductsService>,
    pub(crate) service: Service,
}

impl ScenarioContext {
    pub(crate) fn new() -> Self {
        let products = Arc::new(InMemoryProductsService::default());
        let app = AppContext::new(products.clone());

        Self {
            products,
            service: Service::new(app_router(State::from_app_context(app))),
        }
    }
}
