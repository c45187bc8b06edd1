use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CalorieSnap — track the calories on your plate from a meal photo (demo).
#[derive(Parser, Debug)]
#[command(name = "calorie_snap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive tracking session.
    Track {
        /// Photo of the meal to attach at startup.
        #[arg(long)]
        image: Option<PathBuf>,

        /// Directory where exported reports are written.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print the food catalog.
    Catalog,

    /// Search the catalog by name.
    Search {
        /// Case-insensitive substring of a food name.
        term: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Track {
            image: None,
            out_dir: PathBuf::from("."),
        }
    }
}
