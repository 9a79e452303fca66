use rstest::*;

use super::{IngredientEntry, IngredientList, SourcingType};

/// Small mixed menu covering both sourcing types and one unknown type
///
/// Shared by the controller tests so that scaling and formatting agree on the
/// same data.
#[fixture]
pub fn mixed_menu() -> IngredientList {
    [
        IngredientEntry::new("Chicken Breast", 1500.0, SourcingType::Wholesale).with_unit("g"),
        IngredientEntry::new("Garlic Cloves", 10.0, SourcingType::Retail).with_unit("pcs"),
        IngredientEntry::new("Saffron", 0.5, SourcingType::from("specialty")).with_unit("g"),
        IngredientEntry::new("Lemon", 3.0, SourcingType::Retail).with_unit("pcs"),
        IngredientEntry::new("Olive Oil", 100.0, SourcingType::Wholesale).with_unit("ml"),
    ]
    .into_iter()
    .collect()
}

/// Same shape as [`mixed_menu`] but without units, as loaded by the basic variant
#[fixture]
pub fn unitless_menu() -> IngredientList {
    [
        IngredientEntry::new("Bread Rolls", 10.0, SourcingType::Retail),
        IngredientEntry::new("Butter", 200.0, SourcingType::Wholesale),
    ]
    .into_iter()
    .collect()
}
