//! Custom actions for the Draft actor.
//!
//! Every wizard operation the storefront performs on an open draft is one of
//! these actions. Line edits, step moves and the two submission phases are
//! all serialized through the draft actor's mailbox, so a draft is only ever
//! mutated by one action at a time.

use crate::model::{OrderLine, Step};

/// Operations on an open [`OrderDraft`](crate::model::OrderDraft).
#[derive(Debug, Clone)]
pub enum DraftAction {
    /// Add one unit of a catalog product, merging into an existing line.
    /// The product is looked up in the catalog; unknown ids fail.
    AddItem { product_id: String },
    /// Set the quantity of an existing line. Zero removes the line.
    SetItemQuantity { product_id: String, quantity: u32 },
    /// Drop the line for a product. Idempotent.
    RemoveItem { product_id: String },
    /// Move one step forward; blocked while the current step is incomplete.
    Advance,
    /// Move one step back, clamped at step 1.
    Retreat,
    /// Clear the draft and return to step 1.
    Reset,
    /// Start the mock submission (Idle → Submitting). Fails if a submission
    /// is already in flight or done.
    BeginSubmit,
    /// Complete the mock submission (Submitting → Succeeded, step 6).
    FinishSubmit,
    /// Compute the running total.
    Total,
}

/// Results from draft actions; variants match 1:1 with [`DraftAction`].
#[derive(Debug, Clone)]
pub enum DraftActionResult {
    /// The line after the add (carrying the merged quantity).
    AddItem(OrderLine),
    /// The updated line, or `None` when the line was removed.
    SetItemQuantity(Option<OrderLine>),
    RemoveItem(()),
    /// The step the wizard is now on.
    Advance(Step),
    Retreat(Step),
    Reset(()),
    BeginSubmit(()),
    FinishSubmit(()),
    /// Total in FCFA.
    Total(u64),
}
