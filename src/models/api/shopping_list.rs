use std::fmt;

use crate::models::IngredientEntry;

/// A single `- name: quantity [unit]` line as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: Option<String>,
}

impl From<&IngredientEntry> for ShoppingListItem {
    fn from(entry: &IngredientEntry) -> Self {
        Self {
            ingredient_name: entry.name.clone(),
            quantity: entry.quantity,
            unit: entry.unit.clone(),
        }
    }
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {:.2}", self.ingredient_name, self.quantity)?;
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}

/// Scaled ingredients split by where they are bought
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    pub retail: Vec<ShoppingListItem>,
    pub wholesale: Vec<ShoppingListItem>,
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Retail Ingredients:")?;
        for item in &self.retail {
            writeln!(f, "{}", item)?;
        }

        // Both headers are always printed, even for an empty group
        writeln!(f)?;
        writeln!(f, "Wholesale Ingredients:")?;
        for item in &self.wholesale {
            writeln!(f, "{}", item)?;
        }

        Ok(())
    }
}
