use super::{SourcingType, Variant};
use crate::error::LoadError;

/// Unit labels offered for manual entry before falling back to a custom one
pub const SUGGESTED_UNITS: [&str; 10] = [
    "g", "kg", "ml", "l", "pcs", "tbsp", "tsp", "cup", "oz", "lb",
];

/// Upper bound on the number of records a manual form may hold
pub const MAX_MANUAL_RECORDS: usize = 500;

/// Sourcing choices offered by the manual form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourcingChoice {
    #[default]
    Wholesale,
    Retail,
}

impl SourcingChoice {
    pub fn toggled(self) -> Self {
        match self {
            SourcingChoice::Wholesale => SourcingChoice::Retail,
            SourcingChoice::Retail => SourcingChoice::Wholesale,
        }
    }
}

impl From<SourcingChoice> for SourcingType {
    fn from(choice: SourcingChoice) -> Self {
        match choice {
            SourcingChoice::Wholesale => SourcingType::Wholesale,
            SourcingChoice::Retail => SourcingType::Retail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitChoice {
    /// Index into [`SUGGESTED_UNITS`]
    Suggested(usize),
    Other(String),
}

impl Default for UnitChoice {
    fn default() -> Self {
        UnitChoice::Suggested(0)
    }
}

impl UnitChoice {
    pub fn label(&self) -> &str {
        match self {
            UnitChoice::Suggested(index) => SUGGESTED_UNITS
                .get(*index)
                .copied()
                .unwrap_or(SUGGESTED_UNITS[0]),
            UnitChoice::Other(custom) => custom.as_str(),
        }
    }
}

/// One manually entered ingredient, before blank names are filtered out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualEntry {
    pub name: String,
    pub quantity: f64,
    pub sourcing: SourcingChoice,
    pub unit: UnitChoice,
}

/// A fixed number of manual records plus the variant they were entered for
#[derive(Debug, Clone, PartialEq)]
pub struct ManualForm {
    pub variant: Variant,
    pub entries: Vec<ManualEntry>,
}

impl ManualForm {
    pub fn new(count: usize, variant: Variant) -> Result<Self, LoadError> {
        if count == 0 {
            return Err(LoadError::NoManualRecords);
        }
        if count > MAX_MANUAL_RECORDS {
            return Err(LoadError::TooManyRecords {
                count,
                max: MAX_MANUAL_RECORDS,
            });
        }
        Ok(Self {
            variant,
            entries: vec![ManualEntry::default(); count],
        })
    }
}
