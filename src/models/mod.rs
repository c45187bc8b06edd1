mod food;
mod report;

pub use food::{FoodDefinition, LedgerItem, Pricing};
pub use report::{Report, ReportItem};
