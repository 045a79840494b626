//! Category display formatting

use crate::display::width_of;
use crate::models::Category;

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| width_of(&c.name))
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<7}  {}\n",
        "Name",
        "Type",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<7}  {:-<36}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<name_width$}  {:<7}  {}\n",
            category.name,
            category.kind.as_str(),
            category.id,
            name_width = name_width,
        ));
    }

    output
}
