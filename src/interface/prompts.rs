use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog;
use crate::detect::ImageHandle;
use crate::error::{Result, SnapError};
use crate::export::ReportFormat;
use crate::interface::render::portion_label;
use crate::models::FoodDefinition;
use crate::state::Ledger;

/// What the user picked from the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    AddFood,
    AutoDetect,
    AdjustPortion,
    RemoveItem,
    AttachPhoto,
    ExportReport,
    Quit,
}

/// Prompt for the next session action.
pub fn prompt_action() -> Result<SessionAction> {
    let options = [
        "Add food",
        "Auto-detect from photo (demo)",
        "Adjust portion",
        "Remove item",
        "Attach photo",
        "Export report",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => SessionAction::AddFood,
        1 => SessionAction::AutoDetect,
        2 => SessionAction::AdjustPortion,
        3 => SessionAction::RemoveItem,
        4 => SessionAction::AttachPhoto,
        5 => SessionAction::ExportReport,
        _ => SessionAction::Quit,
    })
}

/// Prompt for a search term. Empty input cancels.
pub fn prompt_search_term() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search food (Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Resolve a search term to a catalog entry.
///
/// Substring matches are offered directly; when there are none, falls back
/// to a jaro-winkler "did you mean" suggestion over the whole catalog.
pub fn pick_food(term: &str) -> Result<Option<&'static FoodDefinition>> {
    let matches = catalog::search(term);

    if matches.is_empty() {
        return suggest_closest(term);
    }

    if matches.len() == 1 {
        return Ok(Some(matches[0]));
    }

    let mut options: Vec<String> = matches.iter().map(|f| f.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(matches.get(selection).copied())
}

/// Fuzzy fallback when the substring search comes back empty.
fn suggest_closest(term: &str) -> Result<Option<&'static FoodDefinition>> {
    let needle = term.to_lowercase();

    let mut candidates: Vec<(&'static FoodDefinition, f64)> = catalog::all()
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((best, _)) = candidates.first() else {
        println!("No foods match '{}'", term);
        return Ok(None);
    };

    let confirm = Confirm::new()
        .with_prompt(format!("Did you mean '{}'?", best.name))
        .default(true)
        .interact()?;

    Ok(if confirm { Some(*best) } else { None })
}

/// Prompt for a gram portion within the slider range of the original UI.
pub fn prompt_grams(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Portion in grams (0-600)")
        .default(format!("{}", current))
        .interact_text()?;

    let grams: f64 = input
        .trim()
        .parse()
        .map_err(|_| SnapError::InvalidInput("Invalid number".to_string()))?;

    if !(0.0..=600.0).contains(&grams) {
        return Err(SnapError::InvalidInput(
            "Grams must be between 0 and 600".to_string(),
        ));
    }

    Ok(grams)
}

/// Prompt for a unit count within the slider range of the original UI.
pub fn prompt_units(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Units (0-5)")
        .default(format!("{}", current))
        .interact_text()?;

    let units: f64 = input
        .trim()
        .parse()
        .map_err(|_| SnapError::InvalidInput("Invalid number".to_string()))?;

    if !(0.0..=5.0).contains(&units) {
        return Err(SnapError::InvalidInput(
            "Units must be between 0 and 5".to_string(),
        ));
    }

    Ok(units)
}

/// Pick one ledger item by position; returns its id, or None on cancel.
pub fn prompt_item_selection(ledger: &Ledger, prompt: &str) -> Result<Option<u64>> {
    if ledger.is_empty() {
        println!("No foods added yet.");
        return Ok(None);
    }

    let mut options: Vec<String> = ledger
        .items()
        .iter()
        .map(|item| format!("{} ({})", item.name, portion_label(item)))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ledger.items().get(selection).map(|item| item.id))
}

/// Prompt for the export format.
pub fn prompt_format() -> Result<ReportFormat> {
    let selection = Select::new()
        .with_prompt("Report format")
        .items(&["JSON", "CSV"])
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => ReportFormat::Csv,
        _ => ReportFormat::Json,
    })
}

/// Prompt for a photo path. Empty input cancels.
///
/// The file is never opened here; the handle stays opaque.
pub fn prompt_image_path() -> Result<Option<ImageHandle>> {
    let input: String = Input::new()
        .with_prompt("Path to the meal photo (Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageHandle::new(PathBuf::from(input))))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
