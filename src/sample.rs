//! Example menus offered to users as a starting point for their own files.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::models::Variant;

pub const SAMPLE_FILE_NAME: &str = "sample_menu.csv";

pub const SAMPLE_MENU_BASIC: &str = "Ingredient,Quantity,Type
Chicken Breast (g),1500,wholesale
Olive Oil (ml),100,wholesale
Garlic Cloves,10,retail
Lemon (pcs),3,retail
Salt (g),20,wholesale
Black Pepper (g),5,wholesale
Roasted Vegetables Mix (g),1200,wholesale
Bread Rolls (pcs),10,retail
Butter (g),200,wholesale
Caesar Dressing (ml),300,wholesale
Parmesan Cheese (g),100,wholesale
Mixed Greens (g),500,wholesale
Tomatoes (pcs),5,retail
Cucumber (pcs),3,retail
Fruit Salad Mix (g),1500,wholesale
Cookies (pcs),20,retail
";

pub const SAMPLE_MENU_WITH_UNITS: &str = "Ingredient,Quantity,Type,Unit
Chicken Breast,1500,wholesale,g
Olive Oil,100,wholesale,ml
Garlic Cloves,10,retail,pcs
Lemon,3,retail,pcs
Salt,20,wholesale,g
Black Pepper,5,wholesale,g
Roasted Vegetables Mix,1200,wholesale,g
Bread Rolls,10,retail,pcs
Butter,200,wholesale,g
Caesar Dressing,300,wholesale,ml
Parmesan Cheese,100,wholesale,g
Mixed Greens,500,wholesale,g
Tomatoes,5,retail,pcs
Cucumber,3,retail,pcs
Fruit Salad Mix,1500,wholesale,g
Cookies,20,retail,pcs
";

pub fn sample_menu(variant: Variant) -> &'static str {
    match variant {
        Variant::Basic => SAMPLE_MENU_BASIC,
        Variant::WithUnits => SAMPLE_MENU_WITH_UNITS,
    }
}

/// Render `content` as an inline `data:` link that downloads as `filename`
pub fn csv_download_link(content: &str, filename: &str) -> String {
    let encoded = STANDARD.encode(content.as_bytes());
    format!(
        r#"<a href="data:file/csv;base64,{}" download="{}">Download Sample CSV</a>"#,
        encoded, filename
    )
}
