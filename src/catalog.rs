//! The compiled-in food catalog: a small fixed table of foods with their
//! calorie pricing, plus case-insensitive substring search over it.

use std::sync::LazyLock;

use crate::models::{FoodDefinition, Pricing};

/// The full catalog, in display order.
static CATALOG: LazyLock<Vec<FoodDefinition>> = LazyLock::new(|| {
    use Pricing::{Per100g, PerUnit};

    vec![
        FoodDefinition::new("Manzana", Per100g(52.0)),
        FoodDefinition::new("Banana", Per100g(89.0)),
        FoodDefinition::new("Arroz cocido", Per100g(130.0)),
        FoodDefinition::new("Pasta cocida", Per100g(157.0)),
        FoodDefinition::new("Pollo a la plancha", Per100g(165.0)),
        FoodDefinition::new("Ternera", Per100g(217.0)),
        FoodDefinition::new("Salmón", Per100g(208.0)),
        FoodDefinition::new("Huevo (unidad)", PerUnit(78.0)),
        FoodDefinition::new("Pan rebanada", PerUnit(80.0)),
        FoodDefinition::new("Pizza (porción)", PerUnit(285.0)),
        FoodDefinition::new("Aguacate", Per100g(160.0)),
        FoodDefinition::new("Queso", Per100g(402.0)),
        FoodDefinition::new("Yogur natural", Per100g(59.0)),
        FoodDefinition::new("Lechuga", Per100g(15.0)),
        FoodDefinition::new("Tomate", Per100g(18.0)),
        FoodDefinition::new("Patata cocida", Per100g(87.0)),
        FoodDefinition::new("Aceite de oliva", Per100g(884.0)),
    ]
});

/// All catalog entries, in display order.
pub fn all() -> &'static [FoodDefinition] {
    &CATALOG
}

/// Find an entry by exact name (case-insensitive).
pub fn find_exact(name: &str) -> Option<&'static FoodDefinition> {
    let key = name.to_lowercase();
    all().iter().find(|f| f.key() == key)
}

/// Case-insensitive substring search over food names.
///
/// Results preserve catalog order. An empty term returns no matches; the
/// interactive flow only searches once the user has typed something, so
/// the degenerate match-everything case never reaches the catalog.
pub fn search(term: &str) -> Vec<&'static FoodDefinition> {
    if term.is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    all()
        .iter()
        .filter(|f| f.key().contains(&needle))
        .collect()
}
