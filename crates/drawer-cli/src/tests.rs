use std::io::Write;

use clap::{CommandFactory, Parser};
use drawer_core::models::{DARK_PALETTE, LIGHT_PALETTE};
use drawer_core::{Catalog, DrawerProps, ThemeMode};
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Commands, CompletionShell, RowArgs, ThemeArg};
use crate::commands::common::{apply_overrides, load_config, resolve_context, RenderContext};
use crate::commands::completions::completions_output;
use crate::commands::render::{build_props, render_output};
use crate::commands::strings::{locales_output, strings_output};
use crate::commands::styles::styles_output;
use crate::error::CliError;

fn light_context() -> RenderContext {
    RenderContext {
        palette: LIGHT_PALETTE.clone(),
        catalog: Catalog::bundled(),
    }
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parse_render_with_global_flags() {
    let cli = Cli::try_parse_from([
        "drawer",
        "render",
        "Security",
        "--warning",
        "--no-arrow",
        "--theme",
        "dark",
        "--locale",
        "es",
    ])
    .unwrap();
    assert_eq!(cli.theme, Some(ThemeArg::Dark));
    assert_eq!(cli.locale.as_deref(), Some("es"));
    let Commands::Render { row, json, press } = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(row.title.as_deref(), Some("Security"));
    assert!(row.warning);
    assert!(row.no_arrow);
    assert!(!json);
    assert!(!press);
}

#[test]
fn render_requires_title_or_props_file() {
    assert!(Cli::try_parse_from(["drawer", "render"]).is_err());
    assert!(Cli::try_parse_from(["drawer", "render", "--props", "row.json"]).is_ok());
}

#[test]
fn build_props_maps_flags() {
    let props = build_props(RowArgs {
        title: Some("Lock".to_string()),
        no_border: true,
        no_arrow: true,
        title_color: Some("#112233".to_string()),
        ..RowArgs::default()
    })
    .unwrap();
    assert_eq!(
        props,
        DrawerProps::new("Lock")
            .with_no_border(true)
            .with_arrow_right(false)
            .with_title_color("#112233")
    );
}

#[test]
fn build_props_merges_file_with_flags() {
    let file = write_temp(r#"{ "title": "General", "description": "Currency", "warning": true }"#);
    let props = build_props(RowArgs {
        title: Some("Advanced".to_string()),
        test_id: Some("settings-row-1".to_string()),
        props: Some(file.path().to_path_buf()),
        ..RowArgs::default()
    })
    .unwrap();
    assert_eq!(props.title, "Advanced");
    assert_eq!(props.description.as_deref(), Some("Currency"));
    assert!(props.warning);
    assert!(props.render_arrow_right);
    assert_eq!(props.test_id.as_deref(), Some("settings-row-1"));
}

#[test]
fn build_props_reports_invalid_props_file() {
    let file = write_temp(r#"{ "title": 3 }"#);
    let error = build_props(RowArgs {
        props: Some(file.path().to_path_buf()),
        ..RowArgs::default()
    })
    .unwrap_err();
    assert!(matches!(error, CliError::Serialization(_)));
}

#[test]
fn render_output_prints_outline() {
    let props = DrawerProps::new("Networks")
        .with_arrow_right(false)
        .with_test_id("networks");
    let output = render_output(&props, &light_context(), false).unwrap();
    assert_eq!(
        output,
        "Touchable testID=networks\n  View\n    View\n      Text \"Networks\"\n      View\n"
    );
}

#[test]
fn render_output_json_contains_localized_warning() {
    let props = DrawerProps::new("Security").with_warning(true);
    let output = render_output(&props, &light_context(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["type"], "touchable");
    let warning_text = &value["children"][0]["children"][0]["children"][1]["children"][0]
        ["children"][0]["content"];
    assert_eq!(warning_text, "Wallet unprotected");
}

#[test]
fn styles_output_lists_every_style() {
    let output = styles_output(&DARK_PALETTE, None, false).unwrap();
    let names: Vec<_> = output
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "root",
            "content",
            "title",
            "description",
            "action",
            "icon",
            "noBorder",
            "warning",
            "menuItemWarningText",
        ]
    );
    let title_line = output.lines().find(|line| line.starts_with("title:")).unwrap();
    assert!(title_line.contains("color: #FFFFFF;"));
}

#[test]
fn styles_output_json_applies_title_color() {
    let output = styles_output(&LIGHT_PALETTE, Some("#112233"), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"]["color"], "#112233");
    assert_eq!(value["noBorder"]["borderBottomWidth"], 0);
}

#[test]
fn strings_output_rejects_empty_key() {
    let catalog = Catalog::bundled();
    assert!(matches!(
        strings_output(&catalog, "  "),
        Err(CliError::EmptyStringKey)
    ));
    assert_eq!(
        strings_output(&catalog, "drawer.settings_warning").unwrap(),
        "Wallet unprotected"
    );
}

#[test]
fn locales_output_marks_active_locale() {
    let file = write_temp(r#"{ "locale": "es", "strings": { "de": { "drawer": {} } } }"#);
    let context = resolve_context(Some(file.path()), None, None).unwrap();
    assert_eq!(locales_output(&context.catalog), "  de\n  en\n* es\n");
}

#[test]
fn styles_output_projects_columns_for_content_and_action() {
    let output = styles_output(&LIGHT_PALETTE, None, false).unwrap();
    for name in ["content:", "action:"] {
        let line = output.lines().find(|line| line.starts_with(name)).unwrap();
        assert!(line.contains("flex-direction: column;"), "{line}");
    }
}

#[test]
fn explicit_theme_drops_custom_palette() {
    let config = drawer_core::config::DrawerConfig {
        palette: Some(DARK_PALETTE.clone()),
        ..Default::default()
    };
    let config = apply_overrides(config, Some(ThemeMode::Light), Some(" es ".to_string()));
    assert_eq!(config.palette, None);
    assert_eq!(config.theme, ThemeMode::Light);
    assert_eq!(config.locale.as_deref(), Some("es"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(
        load_config(Some(&path)),
        Err(CliError::ConfigNotFound(_))
    ));
}

#[test]
fn resolve_context_reads_config_file() {
    let file = write_temp(r#"{ "theme": "dark", "locale": "es" }"#);
    let context = resolve_context(Some(file.path()), None, None).unwrap();
    assert_eq!(context.palette, DARK_PALETTE);
    assert_eq!(context.catalog.locale(), "es");
}

#[test]
fn resolve_context_rejects_unknown_locale() {
    let file = write_temp("{}");
    let error = resolve_context(Some(file.path()), None, Some("xx".to_string())).unwrap_err();
    assert_eq!(error.to_string(), "Unknown locale: xx");
}

#[test]
fn completions_name_the_binary() {
    let script = String::from_utf8(completions_output(CompletionShell::Bash)).unwrap();
    assert!(script.contains("drawer"));
}
