use crate::models::{FoodDefinition, LedgerItem};

/// Default portion for a gram-priced food when first added.
pub const DEFAULT_GRAMS: f64 = 150.0;

/// Default portion for a unit-priced food when first added.
pub const DEFAULT_UNITS: f64 = 1.0;

/// A requested portion update.
///
/// Only the field matching the target item's pricing mode is applied; the
/// other field is ignored. Built with [`PortionChange::grams`] or
/// [`PortionChange::units`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PortionChange {
    pub grams: Option<f64>,
    pub units: Option<f64>,
}

impl PortionChange {
    pub fn grams(grams: f64) -> Self {
        Self {
            grams: Some(grams),
            units: None,
        }
    }

    pub fn units(units: f64) -> Self {
        Self {
            grams: None,
            units: Some(units),
        }
    }
}

/// The session's ordered list of added foods.
///
/// Display order is insertion order; there is no re-sorting. Item ids come
/// from a counter owned by the ledger, so two items added from the same
/// catalog entry never collide. The ledger is never persisted; it lives and
/// dies with the session.
#[derive(Debug, Default)]
pub struct Ledger {
    items: Vec<LedgerItem>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a food from the catalog, with its default portion.
    ///
    /// Copies the name and pricing from the definition; the catalog is not
    /// referenced afterwards. Returns the created item.
    pub fn add(&mut self, definition: &FoodDefinition) -> &LedgerItem {
        let quantity = if definition.pricing.is_gram_priced() {
            DEFAULT_GRAMS
        } else {
            DEFAULT_UNITS
        };

        self.next_id += 1;
        let index = self.items.len();
        self.items
            .push(LedgerItem::new(self.next_id, definition, quantity));
        &self.items[index]
    }

    /// Remove the item with the given id.
    ///
    /// Returns whether a removal occurred; an unknown id is a no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    /// Replace an item's portion.
    ///
    /// The change's field matching the item's pricing mode is applied as a
    /// whole-field replacement; the mismatched field is ignored. Negative
    /// values are clamped to zero. Returns whether the item was found.
    pub fn set_portion(&mut self, id: u64, change: PortionChange) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        let value = if item.pricing.is_gram_priced() {
            change.grams
        } else {
            change.units
        };

        if let Some(value) = value {
            item.set_quantity(value.max(0.0));
        }
        true
    }

    pub fn get(&self, id: u64) -> Option<&LedgerItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Current items, in insertion order.
    pub fn items(&self) -> &[LedgerItem] {
        &self.items
    }

    /// Total calories across all current items, recomputed on every call.
    pub fn total_kcal(&self) -> f64 {
        self.items.iter().map(LedgerItem::kcal).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pricing;

    fn apple() -> FoodDefinition {
        FoodDefinition::new("Manzana", Pricing::Per100g(52.0))
    }

    fn egg() -> FoodDefinition {
        FoodDefinition::new("Huevo (unidad)", Pricing::PerUnit(78.0))
    }

    #[test]
    fn test_add_defaults() {
        let mut ledger = Ledger::new();

        let item = ledger.add(&apple());
        assert_eq!(item.grams(), Some(DEFAULT_GRAMS));
        assert_eq!(item.units(), None);

        let item = ledger.add(&egg());
        assert_eq!(item.units(), Some(DEFAULT_UNITS));
        assert_eq!(item.grams(), None);
    }

    #[test]
    fn test_ids_unique_for_same_definition() {
        let mut ledger = Ledger::new();
        let first = ledger.add(&apple()).id;
        let second = ledger.add(&apple()).id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        let id = ledger.add(&apple()).id;

        assert!(!ledger.remove(id + 100));
        assert_eq!(ledger.len(), 1);

        assert!(ledger.remove(id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_set_portion_ignores_mismatched_field() {
        let mut ledger = Ledger::new();
        let id = ledger.add(&apple()).id;

        // A units patch on a gram-priced item is found but not applied.
        assert!(ledger.set_portion(id, PortionChange::units(3.0)));
        assert_eq!(ledger.get(id).unwrap().grams(), Some(DEFAULT_GRAMS));

        assert!(ledger.set_portion(id, PortionChange::grams(300.0)));
        assert_eq!(ledger.get(id).unwrap().grams(), Some(300.0));
    }

    #[test]
    fn test_set_portion_clamps_negative() {
        let mut ledger = Ledger::new();
        let id = ledger.add(&egg()).id;

        assert!(ledger.set_portion(id, PortionChange::units(-2.0)));
        assert_eq!(ledger.get(id).unwrap().units(), Some(0.0));
    }

    #[test]
    fn test_set_portion_unknown_id() {
        let mut ledger = Ledger::new();
        assert!(!ledger.set_portion(42, PortionChange::grams(100.0)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = Ledger::new();
        ledger.add(&egg());
        ledger.add(&apple());
        ledger.add(&egg());

        let names: Vec<&str> = ledger.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Huevo (unidad)", "Manzana", "Huevo (unidad)"]);
    }
}
