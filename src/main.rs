use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;

use calorie_snap::catalog;
use calorie_snap::cli::{Cli, Command};
use calorie_snap::detect::{DemoDetector, FoodDetector, ImageHandle};
use calorie_snap::error::{Result, SnapError};
use calorie_snap::export::{build_report, report_filename, write_report};
use calorie_snap::interface::{
    SessionAction, display_catalog, display_food_list, display_ledger, pick_food, portion_label,
    prompt_action, prompt_format, prompt_grams, prompt_image_path, prompt_item_selection,
    prompt_search_term, prompt_units, prompt_yes_no,
};
use calorie_snap::state::{AppState, PortionChange};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Track { image, out_dir } => cmd_track(image, &out_dir),
        Command::Catalog => {
            display_catalog();
            Ok(())
        }
        Command::Search { term } => cmd_search(&term),
    }
}

/// One-shot catalog search.
fn cmd_search(term: &str) -> Result<()> {
    let matches = catalog::search(term);

    if matches.is_empty() {
        println!("No foods match '{}'", term);
    } else {
        display_food_list(&matches, "Matches");
    }

    Ok(())
}

/// Interactive tracking session.
fn cmd_track(image: Option<PathBuf>, out_dir: &Path) -> Result<()> {
    let mut state = AppState::new();

    if let Some(path) = image {
        let handle = ImageHandle::new(path);
        println!("Attached photo: {}", handle.display_name());
        state.attach_image(handle);
    }

    let mut detector = DemoDetector::new();

    loop {
        display_ledger(&state.ledger);

        match prompt_action()? {
            SessionAction::AddFood => add_food(&mut state)?,
            SessionAction::AutoDetect => auto_detect(&mut state, &mut detector),
            SessionAction::AdjustPortion => adjust_portion(&mut state)?,
            SessionAction::RemoveItem => remove_item(&mut state)?,
            SessionAction::AttachPhoto => attach_photo(&mut state)?,
            SessionAction::ExportReport => export_report(&state, out_dir)?,
            SessionAction::Quit => {
                if state.ledger.is_empty() || prompt_yes_no("Quit without exporting?", true)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Search the catalog and add the picked food with its default portion.
fn add_food(state: &mut AppState) -> Result<()> {
    state.query = prompt_search_term()?;

    if state.query.is_empty() {
        return Ok(());
    }

    if let Some(definition) = pick_food(&state.query)? {
        let item = state.ledger.add(definition);
        println!("Added: {} ({})", item.name, portion_label(item));
    }

    state.query.clear();
    Ok(())
}

/// Run the detector against the attached photo and add everything it finds.
fn auto_detect(state: &mut AppState, detector: &mut impl FoodDetector) {
    let Some(image) = &state.image else {
        println!("Attach a photo first.");
        return;
    };

    let found = detector.detect(image);

    if found.is_empty() {
        println!("Nothing detected.");
        return;
    }

    for definition in &found {
        let item = state.ledger.add(definition);
        println!("Detected: {} ({})", item.name, portion_label(item));
    }

    println!("(Demo detection only; connect a vision service for real results.)");
}

/// Change the portion of one item, respecting its pricing mode.
fn adjust_portion(state: &mut AppState) -> Result<()> {
    let Some(id) = prompt_item_selection(&state.ledger, "Adjust which item?")? else {
        return Ok(());
    };

    let Some(item) = state.ledger.get(id) else {
        return Ok(());
    };

    let prompted = match item.grams() {
        Some(grams) => prompt_grams(grams).map(PortionChange::grams),
        None => prompt_units(item.units().unwrap_or(0.0)).map(PortionChange::units),
    };

    match prompted {
        Ok(change) => {
            state.ledger.set_portion(id, change);
        }
        Err(SnapError::InvalidInput(msg)) => println!("{}", msg),
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Remove one item from the plate.
fn remove_item(state: &mut AppState) -> Result<()> {
    if let Some(id) = prompt_item_selection(&state.ledger, "Remove which item?")? {
        if state.ledger.remove(id) {
            println!("Removed.");
        }
    }

    Ok(())
}

/// Attach (or replace) the meal photo.
fn attach_photo(state: &mut AppState) -> Result<()> {
    if let Some(handle) = prompt_image_path()? {
        println!("Attached photo: {}", handle.display_name());
        state.attach_image(handle);
    }

    Ok(())
}

/// Export the current plate as a dated report file.
fn export_report(state: &AppState, out_dir: &Path) -> Result<()> {
    if state.ledger.is_empty() {
        println!("Nothing to export yet.");
        return Ok(());
    }

    let format = prompt_format()?;
    let now = Utc::now();
    let report = build_report(state.ledger.items(), now);
    let path = out_dir.join(report_filename(now, format));

    write_report(&report, &path, format)?;
    println!("Report written to {}", path.display());

    Ok(())
}
