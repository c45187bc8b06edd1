pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, pick_food, prompt_action, prompt_format, prompt_grams, prompt_image_path,
    prompt_item_selection, prompt_search_term, prompt_units, prompt_yes_no,
};
pub use render::{display_catalog, display_food_list, display_ledger, portion_label, pricing_label};
