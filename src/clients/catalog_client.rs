//! # Catalog Client
//!
//! High-level API for the Catalog actor: create and update products, browse
//! the whole range or a single category.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Category, Product, ProductCreate, ProductUpdate};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::Custom(msg) => CatalogError::ValidationError(msg),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    /// Add a product to the catalog, returning its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Update a product's price and/or description.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: String,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The products of one category, for the gallery's filter tabs.
    #[instrument(skip(self))]
    pub async fn products_in_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, CatalogError> {
        debug!(%category, "Filtering catalog");
        let mut products = self.inner.list().await.map_err(Self::map_error)?;
        products.retain(|p| p.category == category);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_products_in_category_filters_the_listing() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![
            Product::new("product_1", "Cupcake Vanille", 1500, Category::Cupcakes, ""),
            Product::new("product_2", "Gâteau Chocolat", 15000, Category::Cakes, ""),
            Product::new("product_3", "Cupcake Chocolat", 1500, Category::Cupcakes, ""),
        ]);
        let client = CatalogClient::new(mock.client());

        let cupcakes = client.products_in_category(Category::Cupcakes).await.unwrap();
        assert_eq!(cupcakes.len(), 2);
        assert!(cupcakes.iter().all(|p| p.category == Category::Cupcakes));

        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update("product_9".to_string())
            .return_err(FrameworkError::NotFound("product_9".to_string()));
        let client = CatalogClient::new(mock.client());

        let result = client
            .update_product("product_9".to_string(), ProductUpdate::default())
            .await;
        assert_eq!(result, Err(CatalogError::NotFound("product_9".to_string())));

        mock.verify();
    }
}
