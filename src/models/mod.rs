mod guests;
mod ingredient;
mod ingredient_list;
mod manual_entry;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use guests::Guests;
pub use ingredient::{IngredientEntry, SourcingType, Variant};
pub use ingredient_list::{IngredientList, ScaledIngredientList};
pub use manual_entry::{
    MAX_MANUAL_RECORDS, ManualEntry, ManualForm, SUGGESTED_UNITS, SourcingChoice, UnitChoice,
};
