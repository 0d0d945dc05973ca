//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        category::Category,
        data::{NewProduct, ProductFilter, ProductPatch},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn all_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.list_products(ProductFilter::default()).await
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
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

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        debug!(product_id = %created.id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let existing = self
            .repository
            .lock_product(&mut tx, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        // Dropping `tx` on a validation failure rolls back and releases the row lock.
        let merged = patch.apply(&existing)?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &merged)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn all_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products matching every criterion set on the filter.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product, if it exists.
    async fn find_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product, failing with `NotFound` when absent.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves products whose name matches exactly.
    async fn find_products_by_name(
        &self,
        name: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves products with the given availability.
    async fn find_products_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves products in the given category.
    async fn find_products_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Creates a new product, assigning its id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Merges the patch into an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product. Returns whether a row was removed.
    async fn delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError>;
}
