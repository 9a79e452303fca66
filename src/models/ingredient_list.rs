use indexmap::IndexMap;

use super::{Guests, IngredientEntry};

/// Ingredients keyed by name, in the order they were first added
///
/// Inserting a name that is already present replaces the entry but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientList {
    entries: IndexMap<String, IngredientEntry>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the one it replaced if the name was taken
    pub fn insert(&mut self, entry: IngredientEntry) -> Option<IngredientEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&IngredientEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientEntry> {
        self.entries.values()
    }
}

impl FromIterator<IngredientEntry> for IngredientList {
    fn from_iter<I: IntoIterator<Item = IngredientEntry>>(iter: I) -> Self {
        let mut list = IngredientList::new();
        for entry in iter {
            list.insert(entry);
        }
        list
    }
}

/// An ingredient list whose quantities have been scaled for a guest count
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredientList {
    pub guests: Guests,
    pub scale_factor: f64,
    pub ingredients: IngredientList,
}

impl ScaledIngredientList {
    pub fn get(&self, name: &str) -> Option<&IngredientEntry> {
        self.ingredients.get(name)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientEntry> {
        self.ingredients.iter()
    }
}
