//! Catalog-specific resource logic: the bakery's product list.

pub mod entity;
pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Catalog actor and its client.
pub fn new() -> (ResourceActor<Product>, CatalogClient) {
    let product_id_counter = Arc::new(AtomicU64::new(1));
    let next_product_id = move || {
        let id = product_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("product_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_product_id);
    let client = CatalogClient::new(generic_client);

    (actor, client)
}
