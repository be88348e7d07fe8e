//! Drawer CLI - Preview settings drawer rows from the command line
//!
//! Renders rows as outlines or JSON, and prints the style table and
//! localized strings for a theme and locale.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_context;
use crate::commands::completions::run_completions;
use crate::commands::render::run_render;
use crate::commands::strings::{run_locales, run_strings};
use crate::commands::styles::run_styles;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drawer=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let theme = cli.theme.map(Into::into);

    match cli.command {
        Commands::Render { row, json, press } => {
            let context = resolve_context(cli.config.as_deref(), theme, cli.locale)?;
            run_render(row, &context, json, press)?;
        }
        Commands::Styles { title_color, json } => {
            let context = resolve_context(cli.config.as_deref(), theme, cli.locale)?;
            run_styles(&context.palette, title_color.as_deref(), json)?;
        }
        Commands::Strings { key } => {
            let context = resolve_context(cli.config.as_deref(), theme, cli.locale)?;
            run_strings(&context.catalog, &key)?;
        }
        Commands::Locales => {
            let context = resolve_context(cli.config.as_deref(), theme, cli.locale)?;
            run_locales(&context.catalog);
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
