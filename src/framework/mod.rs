//! Generic actor engine for resource management.
//!
//! The order desk is built from a handful of actors that all share the same
//! shape: an entity type implementing [`ActorEntity`], hosted by a
//! [`ResourceActor`], reached through a [`ResourceClient`].
//!
//! # Testing
//!
//! See the [`mock`] module for testing clients without spawning real actors.

pub mod core;
pub mod mock;

pub use self::core::*;
