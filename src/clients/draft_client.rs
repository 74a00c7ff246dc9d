//! # Draft Client
//!
//! The wizard API the storefront drives: open a draft, edit its lines,
//! move between steps, fill in the per-step fields, and submit.
//!
//! Submission is two-phase on the actor (`BeginSubmit` / `FinishSubmit`)
//! with the simulated network delay held *here*, between the phases. The
//! draft actor therefore never sleeps: while one caller waits out the
//! delay, every other draft operation keeps flowing.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

use crate::clients::actor_client::ActorClient;
use crate::draft_actor::{DraftAction, DraftActionResult, DraftError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    ContactInfo, Customization, DraftCreate, DraftUpdate, EventDetails, Fulfillment, OrderDraft,
    OrderLine, Step,
};

/// How long the pretend backend takes to accept an order.
///
/// Fixed, uncancellable, and always resolves — the mock save has no failure
/// path.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Client for interacting with the Draft actor.
#[derive(Clone)]
pub struct DraftClient {
    inner: ResourceClient<OrderDraft>,
}

impl DraftClient {
    pub fn new(inner: ResourceClient<OrderDraft>) -> Self {
        Self { inner }
    }

    async fn action(&self, id: String, action: DraftAction) -> Result<DraftActionResult, DraftError> {
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderDraft> for DraftClient {
    type Error = DraftError;

    fn inner(&self) -> &ResourceClient<OrderDraft> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DraftError::NotFound(id),
            FrameworkError::Custom(msg) => DraftError::ValidationError(msg),
            other => DraftError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl DraftClient {
    /// Open a fresh, empty draft at step 1.
    #[instrument(skip(self))]
    pub async fn open_draft(&self) -> Result<String, DraftError> {
        debug!("Sending request");
        self.inner.create(DraftCreate).await.map_err(Self::map_error)
    }

    /// Add one unit of a catalog product to the draft.
    #[instrument(skip(self))]
    pub async fn add_item(&self, id: String, product_id: String) -> Result<OrderLine, DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::AddItem { product_id }).await? {
            DraftActionResult::AddItem(line) => Ok(line),
            _ => unreachable!("AddItem action must return AddItem result"),
        }
    }

    /// Set a line's quantity; zero removes the line.
    #[instrument(skip(self))]
    pub async fn set_item_quantity(
        &self,
        id: String,
        product_id: String,
        quantity: u32,
    ) -> Result<Option<OrderLine>, DraftError> {
        debug!("Sending request");
        match self
            .action(id, DraftAction::SetItemQuantity { product_id, quantity })
            .await?
        {
            DraftActionResult::SetItemQuantity(line) => Ok(line),
            _ => unreachable!("SetItemQuantity action must return SetItemQuantity result"),
        }
    }

    /// Remove a line entirely.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: String, product_id: String) -> Result<(), DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::RemoveItem { product_id }).await? {
            DraftActionResult::RemoveItem(()) => Ok(()),
            _ => unreachable!("RemoveItem action must return RemoveItem result"),
        }
    }

    /// Move the wizard one step forward.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: String) -> Result<Step, DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::Advance).await? {
            DraftActionResult::Advance(step) => Ok(step),
            _ => unreachable!("Advance action must return Advance result"),
        }
    }

    /// Move the wizard one step back.
    #[instrument(skip(self))]
    pub async fn retreat(&self, id: String) -> Result<Step, DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::Retreat).await? {
            DraftActionResult::Retreat(step) => Ok(step),
            _ => unreachable!("Retreat action must return Retreat result"),
        }
    }

    /// Clear the draft and return to step 1.
    #[instrument(skip(self))]
    pub async fn reset(&self, id: String) -> Result<(), DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::Reset).await? {
            DraftActionResult::Reset(()) => Ok(()),
            _ => unreachable!("Reset action must return Reset result"),
        }
    }

    /// Running total of the draft in FCFA.
    #[instrument(skip(self))]
    pub async fn total(&self, id: String) -> Result<u64, DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::Total).await? {
            DraftActionResult::Total(total) => Ok(total),
            _ => unreachable!("Total action must return Total result"),
        }
    }

    /// Step 2 fields.
    #[instrument(skip(self, customization))]
    pub async fn set_customization(
        &self,
        id: String,
        customization: Customization,
    ) -> Result<OrderDraft, DraftError> {
        debug!("Sending request");
        let update = DraftUpdate { customization: Some(customization), ..Default::default() };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Step 3 fields.
    #[instrument(skip(self, fulfillment))]
    pub async fn set_fulfillment(
        &self,
        id: String,
        fulfillment: Fulfillment,
    ) -> Result<OrderDraft, DraftError> {
        debug!("Sending request");
        let update = DraftUpdate { fulfillment: Some(fulfillment), ..Default::default() };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Step 4 fields.
    #[instrument(skip(self, event))]
    pub async fn set_event(&self, id: String, event: EventDetails) -> Result<OrderDraft, DraftError> {
        debug!("Sending request");
        let update = DraftUpdate { event: Some(event), ..Default::default() };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Step 5 fields.
    #[instrument(skip(self, contact))]
    pub async fn set_contact(&self, id: String, contact: ContactInfo) -> Result<OrderDraft, DraftError> {
        debug!("Sending request");
        let update = DraftUpdate { contact: Some(contact), ..Default::default() };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// First submission phase: validates step 5 and flips the draft to
    /// Submitting. Rejected while an earlier submission is in flight.
    #[instrument(skip(self))]
    pub async fn begin_submit(&self, id: String) -> Result<(), DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::BeginSubmit).await? {
            DraftActionResult::BeginSubmit(()) => Ok(()),
            _ => unreachable!("BeginSubmit action must return BeginSubmit result"),
        }
    }

    /// Second submission phase: Submitting → Succeeded, wizard to step 6.
    #[instrument(skip(self))]
    pub async fn finish_submit(&self, id: String) -> Result<(), DraftError> {
        debug!("Sending request");
        match self.action(id, DraftAction::FinishSubmit).await? {
            DraftActionResult::FinishSubmit(()) => Ok(()),
            _ => unreachable!("FinishSubmit action must return FinishSubmit result"),
        }
    }

    /// Submit the order: begin, wait out the simulated network delay, finish.
    ///
    /// Only this caller is suspended for the delay; the draft actor stays
    /// responsive throughout.
    #[instrument(skip(self))]
    pub async fn submit(&self, id: String) -> Result<(), DraftError> {
        info!("Submitting order");
        self.begin_submit(id.clone()).await?;
        sleep(SUBMIT_DELAY).await;
        self.finish_submit(id).await?;
        info!("Order confirmed");
        Ok(())
    }
}
