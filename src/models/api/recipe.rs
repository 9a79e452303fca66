use std::fmt;

use super::ShoppingListItem;

/// Generic preparation steps printed ahead of every ingredient list
pub const RECIPE_STEPS: [&str; 2] = [
    "Prepare all ingredients as listed.",
    "Combine and cook as per your standard method or recipe instructions.",
];

/// Instruction block listing every scaled ingredient regardless of sourcing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeReport {
    pub ingredients: Vec<ShoppingListItem>,
}

impl fmt::Display for RecipeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe Instructions:")?;
        for (i, step) in RECIPE_STEPS.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }

        writeln!(f)?;
        writeln!(f, "Ingredients Needed:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "{}", ingredient)?;
        }

        Ok(())
    }
}
