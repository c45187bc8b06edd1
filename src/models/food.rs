use serde::{Deserialize, Serialize};

/// How a food's calories are priced: per 100 grams, or per discrete unit.
///
/// A food always has exactly one pricing mode; the enum makes the
/// "never both, never neither" rule unrepresentable rather than checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pricing {
    #[serde(rename = "kcalPer100g")]
    Per100g(f64),

    #[serde(rename = "kcalPerUnit")]
    PerUnit(f64),
}

impl Pricing {
    #[inline]
    pub fn is_gram_priced(&self) -> bool {
        matches!(self, Pricing::Per100g(_))
    }

    /// Calorie rate per 100 g, if gram-priced.
    pub fn kcal_per_100g(&self) -> Option<f64> {
        match self {
            Pricing::Per100g(k) => Some(*k),
            Pricing::PerUnit(_) => None,
        }
    }

    /// Calorie rate per unit, if unit-priced.
    pub fn kcal_per_unit(&self) -> Option<f64> {
        match self {
            Pricing::Per100g(_) => None,
            Pricing::PerUnit(k) => Some(*k),
        }
    }
}

/// A catalog entry: a food name and its calorie pricing.
///
/// Catalog entries are immutable; a [`LedgerItem`] copies the fields it
/// needs at add-time and never refers back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub name: String,

    #[serde(flatten)]
    pub pricing: Pricing,
}

impl FoodDefinition {
    pub fn new(name: impl Into<String>, pricing: Pricing) -> Self {
        Self {
            name: name.into(),
            pricing,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// One food on the plate: a snapshot of a catalog entry plus a portion.
///
/// The portion is grams for gram-priced items and a unit count for
/// unit-priced items. Ids are assigned by the ledger and are unique for
/// the lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerItem {
    pub id: u64,
    pub name: String,
    pub pricing: Pricing,
    quantity: f64,
}

impl LedgerItem {
    pub(crate) fn new(id: u64, definition: &FoodDefinition, quantity: f64) -> Self {
        Self {
            id,
            name: definition.name.clone(),
            pricing: definition.pricing,
            quantity,
        }
    }

    /// Portion in grams, present iff the item is gram-priced.
    pub fn grams(&self) -> Option<f64> {
        self.pricing.is_gram_priced().then_some(self.quantity)
    }

    /// Portion in units, present iff the item is unit-priced.
    pub fn units(&self) -> Option<f64> {
        (!self.pricing.is_gram_priced()).then_some(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    /// Calories for this item at its current portion.
    pub fn kcal(&self) -> f64 {
        match self.pricing {
            Pricing::Per100g(k) => k * self.quantity / 100.0,
            Pricing::PerUnit(k) => k * self.quantity,
        }
    }
}
