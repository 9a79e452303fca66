use std::io::Write;

use catering_scaler::controllers::{generate_report, load_ingredients_from_path};
use catering_scaler::error::LoadError;
use catering_scaler::models::api::ScaleRequest;
use catering_scaler::models::{Guests, Variant};
use catering_scaler::sample::{SAMPLE_MENU_BASIC, SAMPLE_MENU_WITH_UNITS};
use tempfile::NamedTempFile;

fn write_menu(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write menu");
    file
}

#[test]
fn test_sample_menu_with_units_for_twenty_guests() {
    let file = write_menu(SAMPLE_MENU_WITH_UNITS);

    let ingredients =
        load_ingredients_from_path(file.path(), Variant::WithUnits).expect("Failed to load menu");
    let request = ScaleRequest::new(ingredients, Guests::new(20).expect("valid guests"));
    let report = generate_report(&request).expect("report should be generated");

    assert_eq!(
        report.shopping_list,
        "Retail Ingredients:
- Garlic Cloves: 20.00 pcs
- Lemon: 6.00 pcs
- Bread Rolls: 20.00 pcs
- Tomatoes: 10.00 pcs
- Cucumber: 6.00 pcs
- Cookies: 40.00 pcs

Wholesale Ingredients:
- Chicken Breast: 3000.00 g
- Olive Oil: 200.00 ml
- Salt: 40.00 g
- Black Pepper: 10.00 g
- Roasted Vegetables Mix: 2400.00 g
- Butter: 400.00 g
- Caesar Dressing: 600.00 ml
- Parmesan Cheese: 200.00 g
- Mixed Greens: 1000.00 g
- Fruit Salad Mix: 3000.00 g
"
    );

    assert!(report.recipe.starts_with(
        "Recipe Instructions:
1. Prepare all ingredients as listed.
2. Combine and cook as per your standard method or recipe instructions.

Ingredients Needed:
- Chicken Breast: 3000.00 g
- Olive Oil: 200.00 ml
- Garlic Cloves: 20.00 pcs
"
    ));
    assert_eq!(report.recipe.matches("\n- ").count(), 16);
}

#[test]
fn test_basic_sample_for_five_guests() {
    let file = write_menu(SAMPLE_MENU_BASIC);

    let ingredients =
        load_ingredients_from_path(file.path(), Variant::Basic).expect("Failed to load menu");
    let request = ScaleRequest::new(ingredients, Guests::new(5).expect("valid guests"));
    let report = generate_report(&request).expect("report should be generated");

    assert!(report.shopping_list.contains("- Lemon (pcs): 1.50\n"));
    assert!(report.shopping_list.contains("- Black Pepper (g): 2.50\n"));
    assert!(report.recipe.ends_with("- Cookies (pcs): 10.00\n"));
}

#[test]
fn test_missing_quantity_column_prevents_report() {
    let file = write_menu("Ingredient,Type,Unit\nSalt,wholesale,g\n");

    let result = load_ingredients_from_path(file.path(), Variant::WithUnits);

    assert!(matches!(result, Err(LoadError::MissingColumn("Quantity"))));
}

#[test]
fn test_unknown_types_reach_recipe_only() {
    let file = write_menu(
        "Ingredient,Quantity,Type,Unit\n\
         Saffron,1,specialty,g\n\
         Rice,2000,wholesale,g\n\
         Limes,4,Retail,pcs\n",
    );

    let ingredients =
        load_ingredients_from_path(file.path(), Variant::WithUnits).expect("Failed to load menu");
    let request = ScaleRequest::new(ingredients, Guests::new(10).expect("valid guests"));
    let report = generate_report(&request).expect("report should be generated");

    assert_eq!(
        report.shopping_list,
        "Retail Ingredients:\n\nWholesale Ingredients:\n- Rice: 2000.00 g\n"
    );
    assert!(report.recipe.contains("- Saffron: 1.00 g\n"));
    assert!(report.recipe.contains("- Limes: 4.00 pcs\n"));
}

#[test]
fn test_header_only_file_is_noop() {
    let file = write_menu("Ingredient,Quantity,Type\n");

    let ingredients =
        load_ingredients_from_path(file.path(), Variant::Basic).expect("Failed to load menu");
    let request = ScaleRequest::new(ingredients, Guests::new(30).expect("valid guests"));

    assert!(generate_report(&request).is_none());
}

#[test]
fn test_zero_guests_never_reaches_scaler() {
    assert!(Guests::new(0).is_err());
}
