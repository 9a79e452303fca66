mod loader_controller;
mod report_controller;
mod scale_controller;

pub use loader_controller::{
    INGREDIENT_COLUMN, QUANTITY_COLUMN, TYPE_COLUMN, UNIT_COLUMN, load_ingredients_from_csv,
    load_ingredients_from_manual, load_ingredients_from_path,
};
pub use report_controller::{
    build_recipe, build_shopping_list, format_recipe, format_shopping_list, generate_report,
};
pub use scale_controller::{REFERENCE_BATCH, scale, scale_factor};
