//! # Observability & Tracing
//!
//! Structured logging for the whole order desk, via the `tracing` crate.
//!
//! ## What gets traced
//!
//! - **Actor lifecycle**: startup, every Create/Get/List/Update/Delete/
//!   Action, shutdown with final store size.
//! - **Client calls**: each `DraftClient`/`CatalogClient` method carries an
//!   `#[instrument]` span, so a submission shows up as
//!   `submit → begin_submit → finish_submit` with the draft id attached.
//! - **Validation failures**: logged at `warn` with the entity id and the
//!   customer-facing message.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry (e.g. the DraftUpdate being applied)
//! RUST_LOG=debug cargo run
//! ```
//!
//! The format hides module paths (`with_target(false)`) — the actor loop
//! already tags every line with the short `entity_type` instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
