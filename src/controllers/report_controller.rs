use tracing::{debug, info, warn};

use crate::models::api::{RecipeReport, Report, ScaleRequest, ShoppingList, ShoppingListItem};
use crate::models::{ScaledIngredientList, SourcingType};

use super::scale;

/// Split scaled ingredients into retail and wholesale groups
///
/// Entries with any other sourcing type are left out of both groups.
pub fn build_shopping_list(scaled: &ScaledIngredientList) -> ShoppingList {
    let mut shopping_list = ShoppingList::default();

    for entry in scaled.iter() {
        match &entry.sourcing_type {
            SourcingType::Retail => shopping_list.retail.push(entry.into()),
            SourcingType::Wholesale => shopping_list.wholesale.push(entry.into()),
            SourcingType::Other(raw) => {
                warn!(
                    ingredient = %entry.name,
                    sourcing_type = %raw,
                    "Ingredient has no retail/wholesale type, leaving it off the shopping list"
                );
            }
        }
    }

    shopping_list
}

pub fn build_recipe(scaled: &ScaledIngredientList) -> RecipeReport {
    RecipeReport {
        ingredients: scaled.iter().map(ShoppingListItem::from).collect(),
    }
}

pub fn format_shopping_list(scaled: &ScaledIngredientList) -> String {
    build_shopping_list(scaled).to_string()
}

pub fn format_recipe(scaled: &ScaledIngredientList) -> String {
    build_recipe(scaled).to_string()
}

/// Run the full scale-and-format pipeline for one request
///
/// Returns `None` when there is nothing to scale.
pub fn generate_report(request: &ScaleRequest) -> Option<Report> {
    if request.ingredients.is_empty() {
        debug!("No ingredients, skipping report generation");
        return None;
    }

    let scaled = scale(&request.ingredients, request.guests);
    let shopping_list = format_shopping_list(&scaled);
    let recipe = format_recipe(&scaled);

    info!(
        guests = request.guests.get(),
        ingredients = scaled.len(),
        "Generated shopping list and recipe"
    );

    Some(Report {
        scaled,
        shopping_list,
        recipe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::{mixed_menu, unitless_menu};
    use crate::models::{Guests, IngredientEntry, IngredientList};
    use rstest::*;

    fn scaled_for(list: &IngredientList, count: u32) -> ScaledIngredientList {
        scale(list, Guests::new(count).expect("guest count should be valid"))
    }

    #[rstest]
    fn test_shopping_list_partitions_by_type(mixed_menu: IngredientList) {
        let shopping_list = build_shopping_list(&scaled_for(&mixed_menu, 10));

        let retail: Vec<&str> = shopping_list
            .retail
            .iter()
            .map(|item| item.ingredient_name.as_str())
            .collect();
        let wholesale: Vec<&str> = shopping_list
            .wholesale
            .iter()
            .map(|item| item.ingredient_name.as_str())
            .collect();

        assert_eq!(retail, vec!["Garlic Cloves", "Lemon"]);
        assert_eq!(wholesale, vec!["Chicken Breast", "Olive Oil"]);
    }

    #[rstest]
    fn test_unknown_type_only_in_recipe(mixed_menu: IngredientList) {
        let scaled = scaled_for(&mixed_menu, 10);

        let shopping_list = format_shopping_list(&scaled);
        let recipe = format_recipe(&scaled);

        assert!(!shopping_list.contains("Saffron"));
        assert_eq!(recipe.matches("- Saffron: 0.50 g\n").count(), 1);
    }

    #[rstest]
    fn test_recipe_lists_every_entry_once_in_order(mixed_menu: IngredientList) {
        let recipe = build_recipe(&scaled_for(&mixed_menu, 30));

        let names: Vec<&str> = recipe
            .ingredients
            .iter()
            .map(|item| item.ingredient_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Chicken Breast", "Garlic Cloves", "Saffron", "Lemon", "Olive Oil"]
        );
    }

    #[rstest]
    fn test_formatting_precision(unitless_menu: IngredientList) {
        let scaled = scaled_for(&unitless_menu, 20);

        let shopping_list = format_shopping_list(&scaled);

        assert_eq!(
            shopping_list,
            "Retail Ingredients:\n- Bread Rolls: 20.00\n\nWholesale Ingredients:\n- Butter: 400.00\n"
        );
    }

    #[test]
    fn test_garlic_scenario() {
        let list: IngredientList =
            [IngredientEntry::new("Garlic Cloves", 10.0, SourcingType::Retail).with_unit("pcs")]
                .into_iter()
                .collect();
        let request = ScaleRequest::new(list, Guests::new(20).expect("valid guests"));

        let report = generate_report(&request).expect("report should be generated");

        assert_eq!(
            report.scaled.get("Garlic Cloves").map(|e| e.quantity),
            Some(20.0)
        );
        assert_eq!(
            report.shopping_list,
            "Retail Ingredients:\n- Garlic Cloves: 20.00 pcs\n\nWholesale Ingredients:\n"
        );
        assert!(report.recipe.ends_with("Ingredients Needed:\n- Garlic Cloves: 20.00 pcs\n"));
    }

    #[test]
    fn test_empty_request_is_noop() {
        let request = ScaleRequest::new(IngredientList::new(), Guests::new(20).expect("valid guests"));

        assert!(generate_report(&request).is_none());
    }
}
