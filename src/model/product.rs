use std::fmt;

use serde::{Deserialize, Serialize};

/// Pastry families the catalog is browsed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cupcakes,
    Cakes,
    Donuts,
    Tarts,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Cupcakes => "cupcakes",
            Category::Cakes => "cakes",
            Category::Donuts => "donuts",
            Category::Tarts => "tarts",
        };
        write!(f, "{}", name)
    }
}

/// A pastry offered by the bakery.
///
/// Prices are whole FCFA; the bakery has no sub-unit pricing.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) (see
/// [`crate::catalog_actor`]) so the catalog actor can manage it. Drafts
/// capture the name and price of a product at the moment it is added, so a
/// later catalog update never rewrites an open draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub description: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// The `id` is normally assigned by the actor system.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u32,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            description: description.into(),
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub description: String,
}

/// Payload for updating a catalog entry. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<u32>,
    pub description: Option<String>,
}
