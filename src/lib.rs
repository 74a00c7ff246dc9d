//! # Pâtisserie Orders
//!
//! > **The order desk of a small Dakar bakery, built as resource-oriented actors.**
//!
//! This crate implements the business logic behind Mariama Pâtisserie's
//! storefront: a product catalog, a six-step order wizard with a running
//! total, a simulated asynchronous submission, and a mocked delivery-zone
//! check. There is no backend and nothing is persisted — a draft lives
//! exactly as long as its actor does.
//!
//! ## Design
//!
//! Every piece of mutable state is owned by an actor that processes its
//! mailbox sequentially, so the wizard's invariants (no duplicate order
//! lines, step 6 only after a successful submission) hold without locks.
//! The generic engine is written once in [`framework`] and instantiated for
//! each entity:
//!
//! - **Catalog** ([`catalog_actor`]): the pastries on offer, browsable by
//!   [`Category`](model::Category).
//! - **Drafts** ([`draft_actor`]): one entity per in-progress order; all
//!   wizard operations are draft actions.
//!
//! The simulated submission is two-phase: the draft flips to `Submitting`,
//! the *client* waits out the fixed delay, then the draft flips to
//! `Succeeded` and lands on the confirmation step. Duplicate submissions
//! bounce off the `Submitting` state; the delay never blocks the actor.
//!
//! ## Module Tour
//!
//! - [`framework`] — the generic `ResourceActor<T>` engine and its mock for
//!   tests.
//! - [`model`] — pure data: products, the [`OrderDraft`](model::OrderDraft)
//!   and its wizard [`Step`](model::Step).
//! - [`delivery`] — the zone matcher (pure functions, no actor).
//! - [`clients`] — typed wrappers: [`CatalogClient`](clients::CatalogClient)
//!   and [`DraftClient`](clients::DraftClient), the wizard API.
//! - [`lifecycle`] — [`BakerySystem`](lifecycle::BakerySystem) wiring and
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod delivery;
pub mod draft_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
