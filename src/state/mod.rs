mod app;
mod ledger;

pub use app::AppState;
pub use ledger::{DEFAULT_GRAMS, DEFAULT_UNITS, Ledger, PortionChange};
