pub mod catalog;
pub mod cli;
pub mod detect;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, SnapError};
pub use models::{FoodDefinition, LedgerItem, Pricing};
pub use state::{AppState, Ledger, PortionChange};
