use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::{IngredientEntry, IngredientList, ManualForm, SourcingType, Variant};

pub const INGREDIENT_COLUMN: &str = "Ingredient";
pub const QUANTITY_COLUMN: &str = "Quantity";
pub const TYPE_COLUMN: &str = "Type";
pub const UNIT_COLUMN: &str = "Unit";

/// Load an ingredient list from a CSV file on disk
pub fn load_ingredients_from_path(
    path: impl AsRef<Path>,
    variant: Variant,
) -> Result<IngredientList, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Opening ingredient file");
    let file = File::open(path)?;
    load_ingredients_from_csv(file, variant)
}

/// Load an ingredient list from CSV text
///
/// Column names are matched exactly and may appear in any order; extra columns
/// are ignored. Any malformed row fails the whole load so nothing downstream
/// ever sees a partial list.
pub fn load_ingredients_from_csv<R: Read>(
    reader: R,
    variant: Variant,
) -> Result<IngredientList, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let name_idx = column(INGREDIENT_COLUMN)?;
    let quantity_idx = column(QUANTITY_COLUMN)?;
    let type_idx = column(TYPE_COLUMN)?;
    let unit_idx = if variant.has_units() {
        Some(column(UNIT_COLUMN)?)
    } else {
        None
    };

    let mut ingredients = IngredientList::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Line numbers as the user sees them, header included
        let row = record
            .position()
            .map_or(index + 2, |position| position.line() as usize);

        let name = record.get(name_idx).unwrap_or_default();
        if name.trim().is_empty() {
            return Err(LoadError::BlankName { row });
        }

        let quantity = parse_quantity(record.get(quantity_idx).unwrap_or_default(), row)?;
        let sourcing_type = SourcingType::from(record.get(type_idx).unwrap_or_default());

        let mut entry = IngredientEntry::new(name, quantity, sourcing_type);
        if let Some(unit_idx) = unit_idx {
            entry = entry.with_unit(record.get(unit_idx).unwrap_or_default());
        }

        if let Some(previous) = ingredients.insert(entry) {
            debug!(ingredient = %previous.name, row, "Duplicate ingredient replaced");
        }
    }

    info!(count = ingredients.len(), ?variant, "Loaded ingredients from CSV");
    Ok(ingredients)
}

fn parse_quantity(raw: &str, row: usize) -> Result<f64, LoadError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LoadError::InvalidQuantity {
            row,
            value: raw.to_string(),
        })?;

    if value < 0.0 {
        return Err(LoadError::NegativeQuantity { row, value });
    }
    Ok(value)
}

/// Build an ingredient list from manually entered records
///
/// Records with a blank name are skipped. The unit is only kept for the
/// unit-bearing variant.
pub fn load_ingredients_from_manual(form: &ManualForm) -> Result<IngredientList, LoadError> {
    let mut ingredients = IngredientList::new();

    for (index, record) in form.entries.iter().enumerate() {
        if record.name.trim().is_empty() {
            debug!(record = index + 1, "Skipping manual record with blank name");
            continue;
        }

        if !record.quantity.is_finite() {
            return Err(LoadError::InvalidQuantity {
                row: index + 1,
                value: record.quantity.to_string(),
            });
        }

        if record.quantity < 0.0 {
            return Err(LoadError::NegativeQuantity {
                row: index + 1,
                value: record.quantity,
            });
        }

        let mut entry =
            IngredientEntry::new(record.name.clone(), record.quantity, record.sourcing.into());
        if form.variant.has_units() {
            entry = entry.with_unit(record.unit.label());
        }
        ingredients.insert(entry);
    }

    info!(count = ingredients.len(), variant = ?form.variant, "Loaded ingredients from manual entry");
    Ok(ingredients)
}
