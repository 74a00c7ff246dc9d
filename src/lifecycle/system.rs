use tracing::{error, info};

use crate::clients::{CatalogClient, DraftClient};

/// The runtime orchestrator for the bakery's order desk.
///
/// `BakerySystem` spins up the two actors, wires their dependency (the
/// draft actor needs a [`CatalogClient`] to resolve added items), and
/// coordinates shutdown.
///
/// # Example
///
/// ```ignore
/// let system = BakerySystem::new();
///
/// let draft_id = system.draft_client.open_draft().await?;
/// system.draft_client.add_item(draft_id.clone(), product_id).await?;
/// // ... walk the wizard, then:
/// system.draft_client.submit(draft_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BakerySystem {
    /// Client for the Catalog actor.
    pub catalog_client: CatalogClient,

    /// Client for the Draft actor (the order wizard).
    pub draft_client: DraftClient,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BakerySystem {
    /// Creates and initializes the system with both actors running.
    ///
    /// The catalog actor has no dependencies; the draft actor receives a
    /// clone of the catalog client as its context.
    pub fn new() -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new();
        let (draft_actor, draft_client) = crate::draft_actor::new();

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let draft_handle = tokio::spawn(draft_actor.run(catalog_client.clone()));

        Self {
            catalog_client,
            draft_client,
            handles: vec![catalog_handle, draft_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains
    /// its mailbox and exits its loop. Returns an error if an actor task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The draft actor holds its own CatalogClient clone as context, so
        // the catalog actor only stops once the draft actor has.
        drop(self.draft_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BakerySystem {
    fn default() -> Self {
        Self::new()
    }
}
