use drawer_core::{create_styles, Palette};

use crate::error::CliError;

pub fn styles_output(
    palette: &Palette,
    title_color: Option<&str>,
    as_json: bool,
) -> Result<String, CliError> {
    let styles = create_styles(palette, title_color);
    if as_json {
        return Ok(serde_json::to_string_pretty(&styles)?);
    }

    Ok(styles
        .entries()
        .iter()
        .map(|(name, style)| format!("{name}: {}\n", style.to_css()))
        .collect())
}

pub fn run_styles(palette: &Palette, title_color: Option<&str>, as_json: bool) -> Result<(), CliError> {
    let output = styles_output(palette, title_color, as_json)?;
    if as_json {
        println!("{output}");
    } else {
        print!("{output}");
    }
    Ok(())
}
