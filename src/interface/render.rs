use crate::export::round_kcal;
use crate::models::{FoodDefinition, LedgerItem, Pricing};
use crate::state::Ledger;

/// Human label for a pricing mode, e.g. "52 kcal / 100 g".
pub fn pricing_label(pricing: &Pricing) -> String {
    match pricing {
        Pricing::Per100g(k) => format!("{} kcal / 100 g", k),
        Pricing::PerUnit(k) => format!("{} kcal / unit", k),
    }
}

/// Human label for an item's current portion, e.g. "150 g" or "2 u".
pub fn portion_label(item: &LedgerItem) -> String {
    match (item.grams(), item.units()) {
        (Some(grams), _) => format!("{} g", grams),
        (_, Some(units)) => format!("{} u", units),
        _ => String::new(),
    }
}

/// Display the plate: every item with its portion and rounded calories,
/// then the running total.
pub fn display_ledger(ledger: &Ledger) {
    println!();
    println!("=== Plate ===");

    if ledger.is_empty() {
        println!("No foods added yet.");
    } else {
        let max_name_len = ledger
            .items()
            .iter()
            .map(|item| item.name.chars().count())
            .max()
            .unwrap_or(10);

        for (i, item) in ledger.items().iter().enumerate() {
            println!(
                "{:>3}. {:<width$}  {:>7}  {:>5} kcal  ({})",
                i + 1,
                item.name,
                portion_label(item),
                round_kcal(item.kcal()),
                pricing_label(&item.pricing),
                width = max_name_len
            );
        }
    }

    println!();
    println!("Total estimated: {} kcal", round_kcal(ledger.total_kcal()));
    println!();
}

/// Display a list of catalog entries.
pub fn display_food_list(foods: &[&FoodDefinition], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} foods) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  {} - {}", food.name, pricing_label(&food.pricing));
    }

    println!();
}

/// Display the full food catalog.
pub fn display_catalog() {
    let foods: Vec<&FoodDefinition> = crate::catalog::all().iter().collect();
    display_food_list(&foods, "Food catalog");
}
