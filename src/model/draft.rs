//! The in-progress order and its wizard state.
//!
//! An [`OrderDraft`] is everything a customer has filled in so far: the
//! selected pastries, free-text customization, fulfillment choice, optional
//! event details and contact information, plus where they currently are in
//! the six-step wizard and whether the order has been sent.
//!
//! All the step-gating and submission rules are plain synchronous methods
//! here; the draft actor (see [`crate::draft_actor`]) only dispatches to
//! them. Validation messages are the customer-facing French strings the
//! storefront displays inline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Product;

// =============================================================================
// WIZARD POSITION
// =============================================================================

/// Position in the order wizard, steps 1 through 6.
///
/// `Confirmation` (step 6) is never reached by advancing; the only way in is
/// a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Products,
    Customization,
    Fulfillment,
    Event,
    Contact,
    Confirmation,
}

impl Step {
    /// 1-based step number shown in the progress header.
    pub fn number(self) -> u8 {
        match self {
            Step::Products => 1,
            Step::Customization => 2,
            Step::Fulfillment => 3,
            Step::Event => 4,
            Step::Contact => 5,
            Step::Confirmation => 6,
        }
    }

    /// The next step reachable by `advance`, if any.
    ///
    /// `Contact` returns `None`: the wizard does not advance past step 5,
    /// it submits.
    fn next(self) -> Option<Step> {
        match self {
            Step::Products => Some(Step::Customization),
            Step::Customization => Some(Step::Fulfillment),
            Step::Fulfillment => Some(Step::Event),
            Step::Event => Some(Step::Contact),
            Step::Contact | Step::Confirmation => None,
        }
    }

    /// The previous step, if any. `Products` is the floor.
    fn prev(self) -> Option<Step> {
        match self {
            Step::Products | Step::Confirmation => None,
            Step::Customization => Some(Step::Products),
            Step::Fulfillment => Some(Step::Customization),
            Step::Event => Some(Step::Fulfillment),
            Step::Contact => Some(Step::Event),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Products => "products",
            Step::Customization => "customization",
            Step::Fulfillment => "fulfillment",
            Step::Event => "event",
            Step::Contact => "contact",
            Step::Confirmation => "confirmation",
        };
        write!(f, "{}", name)
    }
}

/// Where the draft is in the (mock) submission flow.
///
/// There is deliberately no failure state: the simulated save always
/// resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

// =============================================================================
// DRAFT PARTS
// =============================================================================

/// One selected product with its quantity.
///
/// Name and unit price are captured from the catalog when the line is
/// added, so the recap matches what the customer saw at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
}

impl OrderLine {
    /// Line subtotal in FCFA.
    ///
    /// Widened to `u64`: quantity is unbounded above, so the product can
    /// exceed `u32`.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}

/// Free-text customization, all optional (step 2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    pub special_instructions: String,
    pub allergy_info: String,
    pub decoration_preferences: String,
}

/// How the order leaves the bakery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMode {
    #[default]
    Pickup,
    Delivery,
}

/// Pickup or delivery, with the chosen date and time (step 3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub mode: FulfillmentMode,
    pub date: String,
    pub time: String,
}

/// Optional event metadata (step 4).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event_type: String,
    pub guest_count: Option<u32>,
    pub special_occasion: bool,
}

/// Contact details, plus the delivery address when mode is delivery (step 5).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub directions: String,
}

// =============================================================================
// THE DRAFT
// =============================================================================

/// The in-progress, unsubmitted order.
///
/// # Invariants
/// - `lines` never holds two entries for the same product.
/// - Every line has `quantity >= 1`; setting a quantity to zero removes the
///   line instead.
/// - `step` is `Confirmation` iff `submission` is `Succeeded`.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) (see
/// [`crate::draft_actor`]); every wizard operation arrives as a draft
/// action and is applied by the methods below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub id: String,
    pub lines: Vec<OrderLine>,
    pub customization: Customization,
    pub fulfillment: Fulfillment,
    pub event: EventDetails,
    pub contact: ContactInfo,
    pub step: Step,
    pub submission: SubmissionState,
}

impl OrderDraft {
    /// Creates an empty draft at step 1.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lines: Vec::new(),
            customization: Customization::default(),
            fulfillment: Fulfillment::default(),
            event: EventDetails::default(),
            contact: ContactInfo::default(),
            step: Step::default(),
            submission: SubmissionState::default(),
        }
    }

    /// Running total in FCFA: Σ unit price × quantity.
    ///
    /// Pure and recomputed on every call; the total is never stored.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// The line for `product_id`, if one exists.
    pub fn line(&self, product_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Adds one unit of `product`, merging into an existing line.
    ///
    /// Name and unit price come from the catalog entry at add time.
    pub fn add_line(&mut self, product: &Product) -> OrderLine {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
            return line.clone();
        }
        let line = OrderLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        };
        self.lines.push(line.clone());
        line
    }

    /// Sets the quantity of an existing line. Zero removes the line and
    /// returns `None`.
    pub fn set_line_quantity(
        &mut self,
        product_id: &str,
        quantity: u32,
    ) -> Result<Option<OrderLine>, String> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or_else(|| format!("Aucune ligne pour ce produit: {}", product_id))?;

        if quantity == 0 {
            self.lines.remove(index);
            return Ok(None);
        }
        self.lines[index].quantity = quantity;
        Ok(Some(self.lines[index].clone()))
    }

    /// Removes the line for `product_id`. Removing an absent line is a no-op.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Checks whether a step's required fields are filled in.
    ///
    /// Returns the inline, customer-facing message for the first missing
    /// field. Steps 2 and 4 are entirely optional and always complete.
    pub fn step_complete(&self, step: Step) -> Result<(), String> {
        match step {
            Step::Products => {
                if self.lines.is_empty() {
                    return Err("Veuillez sélectionner au moins un produit".to_string());
                }
            }
            Step::Customization | Step::Event | Step::Confirmation => {}
            Step::Fulfillment => {
                if self.fulfillment.date.trim().is_empty() {
                    return Err("Veuillez sélectionner une date de livraison".to_string());
                }
                if self.fulfillment.time.trim().is_empty() {
                    return Err("Veuillez sélectionner une heure de livraison".to_string());
                }
            }
            Step::Contact => {
                if self.contact.full_name.trim().is_empty() {
                    return Err("Le nom complet est requis".to_string());
                }
                if self.contact.phone.trim().is_empty() {
                    return Err("Le numéro de téléphone est requis".to_string());
                }
                if self.fulfillment.mode == FulfillmentMode::Delivery {
                    if self.contact.address.trim().is_empty() {
                        return Err("L'adresse est requise".to_string());
                    }
                    if self.contact.city.trim().is_empty() {
                        return Err("La ville est requise".to_string());
                    }
                }
            }
        }
        Ok(())
    }

    /// Moves one step forward.
    ///
    /// Blocked (draft untouched) when the current step is incomplete, and
    /// at step 5: the only way to the confirmation step is a submission.
    pub fn advance(&mut self) -> Result<Step, String> {
        let next = match self.step.next() {
            Some(next) => next,
            None if self.step == Step::Contact => {
                return Err("Finalisez la commande pour confirmer".to_string());
            }
            None => return Err("Commande déjà confirmée".to_string()),
        };
        self.step_complete(self.step)?;
        self.step = next;
        Ok(self.step)
    }

    /// Moves one step back, clamped at step 1. A confirmed order cannot be
    /// reopened; it only resets.
    pub fn retreat(&mut self) -> Result<Step, String> {
        if self.step == Step::Confirmation {
            return Err("Commande déjà confirmée".to_string());
        }
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        Ok(self.step)
    }

    /// Clears everything and returns to step 1.
    pub fn reset(&mut self) {
        *self = Self::new(self.id.clone());
    }

    /// Starts the submission: Idle → Submitting.
    ///
    /// Requires the wizard to be at step 5 with its fields complete. A
    /// second attempt while Submitting (or after success) is rejected —
    /// this is the duplicate-submission guard.
    pub fn begin_submit(&mut self) -> Result<(), String> {
        match self.submission {
            SubmissionState::Submitting => return Err("Envoi déjà en cours".to_string()),
            SubmissionState::Succeeded => return Err("Commande déjà confirmée".to_string()),
            SubmissionState::Idle => {}
        }
        if self.step != Step::Contact {
            return Err("Finalisez les étapes précédentes avant l'envoi".to_string());
        }
        self.step_complete(Step::Contact)?;
        self.submission = SubmissionState::Submitting;
        Ok(())
    }

    /// Completes the submission: Submitting → Succeeded, wizard to step 6.
    pub fn finish_submit(&mut self) -> Result<(), String> {
        if self.submission != SubmissionState::Submitting {
            return Err("Aucun envoi en cours".to_string());
        }
        self.submission = SubmissionState::Succeeded;
        self.step = Step::Confirmation;
        Ok(())
    }
}

/// Payload for opening a draft. A draft always starts empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftCreate;

/// Partial update applied by the form steps. `None` fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftUpdate {
    pub customization: Option<Customization>,
    pub fulfillment: Option<Fulfillment>,
    pub event: Option<EventDetails>,
    pub contact: Option<ContactInfo>,
}
