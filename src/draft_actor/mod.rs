//! Draft-specific resource logic: the order wizard lives here.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::DraftClient;
use crate::framework::ResourceActor;
use crate::model::OrderDraft;

/// Creates a new Draft actor and its client.
///
/// The actor must be run with a [`CatalogClient`](crate::clients::CatalogClient)
/// as context; adding items performs catalog lookups.
pub fn new() -> (ResourceActor<OrderDraft>, DraftClient) {
    let draft_id_counter = Arc::new(AtomicU64::new(1));
    let next_draft_id = move || {
        let id = draft_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("draft_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_draft_id);
    let client = DraftClient::new(generic_client);

    (actor, client)
}
