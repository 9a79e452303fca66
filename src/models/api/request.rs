use crate::models::{Guests, IngredientList, ScaledIngredientList};

/// Everything a single "generate" action needs
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRequest {
    pub ingredients: IngredientList,
    pub guests: Guests,
}

impl ScaleRequest {
    pub fn new(ingredients: IngredientList, guests: Guests) -> Self {
        Self {
            ingredients,
            guests,
        }
    }
}

/// Output of one run of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub scaled: ScaledIngredientList,
    pub shopping_list: String,
    pub recipe: String,
}
