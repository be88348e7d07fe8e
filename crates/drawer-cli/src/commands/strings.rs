use drawer_core::{Catalog, Localizer};

use crate::error::CliError;

pub fn strings_output(catalog: &Catalog, key: &str) -> Result<String, CliError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::EmptyStringKey);
    }
    Ok(catalog.strings(key))
}

/// One locale per line, the active one marked with `*`.
pub fn locales_output(catalog: &Catalog) -> String {
    catalog
        .locales()
        .map(|locale| {
            let marker = if locale == catalog.locale() { "*" } else { " " };
            format!("{marker} {locale}\n")
        })
        .collect()
}

pub fn run_locales(catalog: &Catalog) {
    print!("{}", locales_output(catalog));
}

pub fn run_strings(catalog: &Catalog, key: &str) -> Result<(), CliError> {
    println!("{}", strings_output(catalog, key)?);
    Ok(())
}
