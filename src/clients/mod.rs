//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod catalog_client;
pub mod draft_client;

pub use actor_client::*;
pub use catalog_client::*;
pub use draft_client::*;
