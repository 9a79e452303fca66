use std::fmt;

use serde::Deserialize;

/// Which flavour of ingredient sheet is in use
///
/// The unit-bearing variant adds a `Unit` column to files and a unit field to
/// manual entry. The basic variant has neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Basic,
    #[default]
    WithUnits,
}

impl Variant {
    pub fn has_units(self) -> bool {
        matches!(self, Variant::WithUnits)
    }
}

/// Where an ingredient is bought
///
/// Only the exact lowercase strings `retail` and `wholesale` are recognised.
/// Anything else is kept verbatim so it can still appear in the recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcingType {
    Retail,
    Wholesale,
    Other(String),
}

impl SourcingType {
    pub fn as_str(&self) -> &str {
        match self {
            SourcingType::Retail => "retail",
            SourcingType::Wholesale => "wholesale",
            SourcingType::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for SourcingType {
    fn from(raw: &str) -> Self {
        match raw {
            "retail" => SourcingType::Retail,
            "wholesale" => SourcingType::Wholesale,
            other => SourcingType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SourcingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line item of an ingredient list
///
/// `quantity` is denominated for the reference batch until the list is scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEntry {
    pub name: String,
    pub quantity: f64,
    pub sourcing_type: SourcingType,
    pub unit: Option<String>,
}

impl IngredientEntry {
    pub fn new(name: impl Into<String>, quantity: f64, sourcing_type: SourcingType) -> Self {
        Self {
            name: name.into(),
            quantity,
            sourcing_type,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
