use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use drawer_core::ThemeMode;

#[derive(Parser)]
#[command(name = "drawer")]
#[command(about = "Preview settings drawer rows from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Theme to render with (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Locale for localized strings (overrides the config file)
    #[arg(long, global = true, value_name = "CODE")]
    pub locale: Option<String>,

    /// Optional path to a drawer config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a row and print its view tree
    Render {
        #[command(flatten)]
        row: RowArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Tap the row once after rendering
        #[arg(long)]
        press: bool,
    },
    /// Print the style table
    Styles {
        /// Title color override
        #[arg(long, value_name = "COLOR")]
        title_color: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a localized string
    Strings {
        /// Dotted string key, e.g. drawer.settings_warning
        key: String,
    },
    /// List locales with a string table
    Locales,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Row properties, from flags or a JSON props file
#[derive(Args, Debug, Default)]
pub struct RowArgs {
    /// Row title
    #[arg(required_unless_present = "props")]
    pub title: Option<String>,
    /// Additional descriptive text
    #[arg(short, long)]
    pub description: Option<String>,
    /// Disable the bottom border
    #[arg(long)]
    pub no_border: bool,
    /// Show the settings warning notification
    #[arg(long)]
    pub warning: bool,
    /// Hide the trailing arrow
    #[arg(long)]
    pub no_arrow: bool,
    /// Identifier attached to the tappable region
    #[arg(long, value_name = "ID")]
    pub test_id: Option<String>,
    /// Title color override
    #[arg(long, value_name = "COLOR")]
    pub title_color: Option<String>,
    /// JSON file with row props (flags given alongside take precedence)
    #[arg(long, value_name = "PATH")]
    pub props: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::System => Self::System,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
