use tracing::debug;

use crate::models::{Guests, IngredientEntry, IngredientList, ScaledIngredientList};

/// Guest count every input quantity is written for
pub const REFERENCE_BATCH: u32 = 10;

pub fn scale_factor(guests: Guests) -> f64 {
    f64::from(guests.get()) / f64::from(REFERENCE_BATCH)
}

/// Scale every quantity from the reference batch to `guests`
///
/// No rounding happens here; quantities are only rounded when displayed.
pub fn scale(ingredients: &IngredientList, guests: Guests) -> ScaledIngredientList {
    let factor = scale_factor(guests);
    debug!(guests = guests.get(), factor, count = ingredients.len(), "Scaling ingredients");

    let scaled = ingredients
        .iter()
        .map(|entry| IngredientEntry {
            quantity: entry.quantity * factor,
            ..entry.clone()
        })
        .collect();

    ScaledIngredientList {
        guests,
        scale_factor: factor,
        ingredients: scaled,
    }
}
