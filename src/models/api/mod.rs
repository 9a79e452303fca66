mod recipe;
mod request;
mod shopping_list;

pub use recipe::{RECIPE_STEPS, RecipeReport};
pub use request::{Report, ScaleRequest};
pub use shopping_list::{ShoppingList, ShoppingListItem};
