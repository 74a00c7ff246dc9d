//! Orchestration: actor startup, dependency wiring, shutdown, tracing.

pub mod system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use system::*;
