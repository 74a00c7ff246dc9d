//! # Core Actor Engine
//!
//! Generic building blocks for the resource actors that power the order desk.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait a resource type implements to be hosted by an actor.
//! - [`ResourceActor`]: The generic actor owning a collection of entities.
//! - [`ResourceClient`]: The generic handle for talking to an actor.
//! - [`FrameworkError`]: Engine-level errors (closed channels, missing entities).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Contract a resource type must satisfy to be managed by a [`ResourceActor`].
///
/// The engine loop is written once against this trait; every entity in the
/// system (products, order drafts) plugs in through its associated types.
/// A draft actor can only ever be sent draft payloads: mixing up payloads is
/// a compile error, not a runtime surprise.
///
/// # Hooks
/// The lifecycle hooks ([`on_create`](ActorEntity::on_create),
/// [`on_delete`](ActorEntity::on_delete)) have do-nothing defaults. They are
/// `async` so an entity can consult other actors through its `Context` — the
/// draft entity, for instance, looks products up in the catalog when a line
/// is added.
///
/// # Context
/// Dependencies are injected at [`ResourceActor::run`] time, not at
/// construction. Entities with no dependencies use `Context = ()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// Payload describing a partial update.
    type UpdateParams: Send + Sync + Debug;

    /// Entity-specific operations beyond plain CRUD (e.g. advancing a wizard).
    type Action: Send + Sync + Debug;

    /// Result type returned by [`handle_action`](ActorEntity::handle_action).
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook.
    type Context: Send + Sync;

    /// Build the full entity from an assigned id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Called right after the entity is constructed, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Apply an update payload to the entity.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), String>;

    /// Called right before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Handle an entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. MESSAGES & ERRORS
// =============================================================================

/// Errors raised by the engine itself rather than by entity logic.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// One-shot response channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request envelope sent to a [`ResourceActor`].
///
/// The variants are the standard resource lifecycle (create, get, list,
/// update, delete) plus `Action` for entity-specific operations. `List`
/// exists because the catalog is browsed as a whole; the other entities
/// are always addressed by id.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR
// =============================================================================

/// The server half of an actor: owns the entity store and the receiving end
/// of the mailbox.
///
/// Each actor processes its mailbox *sequentially*, so entity state needs no
/// locks. All mutations to a given draft happen one after another, in the
/// order the requests arrived.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook, which lets dependencies
    /// be wired up after construction (see [`BakerySystem`](crate::lifecycle::BakerySystem)).
    pub async fn run(mut self, context: T::Context) {
        // Short type name for log lines ("OrderDraft", not the full path).
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle for a [`ResourceActor`]. Cheap to clone.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. ENGINE TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // A minimal entity to exercise the engine end to end.

    #[derive(Clone, Debug, PartialEq)]
    struct Recipe {
        id: String,
        name: String,
        published: bool,
    }

    #[derive(Debug)]
    struct RecipeCreate {
        name: String,
    }

    #[derive(Debug)]
    struct RecipeUpdate {
        name: Option<String>,
    }

    #[derive(Debug)]
    enum RecipeAction {
        Publish,
    }

    #[async_trait]
    impl ActorEntity for Recipe {
        type Id = String;
        type CreateParams = RecipeCreate;
        type UpdateParams = RecipeUpdate;
        type Action = RecipeAction;
        type ActionResult = bool;
        type Context = ();

        fn from_create_params(id: String, params: RecipeCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                name: params.name,
                published: false,
            })
        }

        async fn on_update(&mut self, update: RecipeUpdate, _ctx: &()) -> Result<(), String> {
            if let Some(name) = update.name {
                self.name = name;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: RecipeAction, _ctx: &()) -> Result<bool, String> {
            match action {
                RecipeAction::Publish => {
                    if self.published {
                        Ok(false)
                    } else {
                        self.published = true;
                        Ok(true)
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("recipe_{}", id)
        };

        let (actor, client) = ResourceActor::<Recipe>::new(10, next_id);
        tokio::spawn(actor.run(()));

        // Create
        let id = client
            .create(RecipeCreate { name: "Mille-feuille".into() })
            .await
            .unwrap();
        assert_eq!(id, "recipe_1");

        // Action: first publish flips the flag, second is a no-op
        assert!(client.perform_action(id.clone(), RecipeAction::Publish).await.unwrap());
        assert!(!client.perform_action(id.clone(), RecipeAction::Publish).await.unwrap());

        // Update
        let updated = client
            .update(id.clone(), RecipeUpdate { name: Some("Paris-Brest".into()) })
            .await
            .unwrap();
        assert_eq!(updated.name, "Paris-Brest");

        // List sees every stored entity
        client.create(RecipeCreate { name: "Éclair".into() }).await.unwrap();
        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 2);

        // Delete
        client.delete(id.clone()).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_action_on_missing_entity_is_not_found() {
        let (actor, client) = ResourceActor::<Recipe>::new(10, || "recipe_x".to_string());
        tokio::spawn(actor.run(()));

        let result = client
            .perform_action("ghost".to_string(), RecipeAction::Publish)
            .await;
        assert_eq!(result, Err(FrameworkError::NotFound("ghost".to_string())));
    }
}
