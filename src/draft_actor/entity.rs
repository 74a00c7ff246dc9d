//! [`ActorEntity`] implementation for [`OrderDraft`].
//!
//! The draft's context is a [`CatalogClient`]: adding an item looks the
//! product up in the catalog so the line carries the real name and price.
//! Everything else dispatches to the pure methods on
//! [`OrderDraft`](crate::model::OrderDraft).

use async_trait::async_trait;

use super::actions::{DraftAction, DraftActionResult};
use crate::clients::{ActorClient, CatalogClient};
use crate::framework::ActorEntity;
use crate::model::{DraftCreate, DraftUpdate, OrderDraft};

#[async_trait]
impl ActorEntity for OrderDraft {
    type Id = String;
    type CreateParams = DraftCreate;
    type UpdateParams = DraftUpdate;
    type Action = DraftAction;
    type ActionResult = DraftActionResult;
    type Context = CatalogClient;

    fn from_create_params(id: String, _params: DraftCreate) -> Result<Self, String> {
        Ok(OrderDraft::new(id))
    }

    /// Applies the per-step form fields. `None` fields stay untouched.
    async fn on_update(&mut self, update: DraftUpdate, _ctx: &CatalogClient) -> Result<(), String> {
        if let Some(customization) = update.customization {
            self.customization = customization;
        }
        if let Some(fulfillment) = update.fulfillment {
            self.fulfillment = fulfillment;
        }
        if let Some(event) = update.event {
            self.event = event;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DraftAction,
        ctx: &CatalogClient,
    ) -> Result<DraftActionResult, String> {
        match action {
            DraftAction::AddItem { product_id } => {
                let product = ctx
                    .get(product_id.clone())
                    .await
                    .map_err(|e| e.to_string())?
                    .ok_or_else(|| format!("Produit inconnu: {}", product_id))?;
                Ok(DraftActionResult::AddItem(self.add_line(&product)))
            }
            DraftAction::SetItemQuantity { product_id, quantity } => Ok(
                DraftActionResult::SetItemQuantity(self.set_line_quantity(&product_id, quantity)?),
            ),
            DraftAction::RemoveItem { product_id } => {
                self.remove_line(&product_id);
                Ok(DraftActionResult::RemoveItem(()))
            }
            DraftAction::Advance => Ok(DraftActionResult::Advance(self.advance()?)),
            DraftAction::Retreat => Ok(DraftActionResult::Retreat(self.retreat()?)),
            DraftAction::Reset => {
                self.reset();
                Ok(DraftActionResult::Reset(()))
            }
            DraftAction::BeginSubmit => {
                self.begin_submit()?;
                Ok(DraftActionResult::BeginSubmit(()))
            }
            DraftAction::FinishSubmit => {
                self.finish_submit()?;
                Ok(DraftActionResult::FinishSubmit(()))
            }
            DraftAction::Total => Ok(DraftActionResult::Total(self.total())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Category, Product, Step};

    #[tokio::test]
    async fn test_add_item_pulls_price_from_catalog() {
        let mut catalog_mock = MockClient::<Product>::new();
        catalog_mock
            .expect_get("product_1".to_string())
            .return_ok(Some(Product::new(
                "product_1",
                "Beignets (6 pièces)",
                3000,
                Category::Donuts,
                "",
            )));
        let ctx = CatalogClient::new(catalog_mock.client());

        let mut draft = OrderDraft::new("draft_1");
        let result = draft
            .handle_action(DraftAction::AddItem { product_id: "product_1".to_string() }, &ctx)
            .await
            .unwrap();

        match result {
            DraftActionResult::AddItem(line) => {
                assert_eq!(line.unit_price, 3000);
                assert_eq!(line.quantity, 1);
            }
            other => panic!("Expected AddItem result, got {:?}", other),
        }
        assert_eq!(draft.total(), 3000);
        catalog_mock.verify();
    }

    #[tokio::test]
    async fn test_add_unknown_item_fails() {
        let mut catalog_mock = MockClient::<Product>::new();
        catalog_mock.expect_get("product_9".to_string()).return_ok(None);
        let ctx = CatalogClient::new(catalog_mock.client());

        let mut draft = OrderDraft::new("draft_1");
        let result = draft
            .handle_action(DraftAction::AddItem { product_id: "product_9".to_string() }, &ctx)
            .await;

        assert!(result.is_err());
        assert!(draft.lines.is_empty());
        catalog_mock.verify();
    }

    #[tokio::test]
    async fn test_advance_blocked_on_empty_draft() {
        // No catalog calls expected for step moves.
        let catalog_mock = MockClient::<Product>::new();
        let ctx = CatalogClient::new(catalog_mock.client());

        let mut draft = OrderDraft::new("draft_1");
        let result = draft.handle_action(DraftAction::Advance, &ctx).await;

        assert!(result.is_err());
        assert_eq!(draft.step, Step::Products);
    }
}
