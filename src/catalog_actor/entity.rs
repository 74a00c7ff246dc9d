//! [`ActorEntity`] implementation for [`Product`].
//!
//! The catalog is plain CRUD plus `List`; products have no custom actions.

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        Ok(Self::new(
            id,
            params.name,
            params.price,
            params.category,
            params.description,
        ))
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
