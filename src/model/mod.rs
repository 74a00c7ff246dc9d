//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod draft;
pub mod product;

pub use draft::*;
pub use product::*;
