//! CLI argument definitions for the header generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use thsort_model::{CellTag, ColumnKey, ToggleMode};

#[derive(Parser)]
#[command(
    name = "thsort",
    version,
    about = "Sortable table-header generator",
    long_about = "Rewrite table-header markup so every sortable column gets a sort click\n\
                  handler and a direction glyph.\n\n\
                  Output goes to stdout for pasting into the view; diagnostics go to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with additional view profiles (overrides built-ins by name).
    #[arg(long = "profiles", value_name = "PATH", global = true)]
    pub profiles: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the sortable header block of a view.
    Render(RenderArgs),

    /// List available view profiles.
    Profiles(ProfilesArgs),

    /// List the columns of a view in header order.
    Columns(ColumnsArgs),

    /// Replay header clicks and show the resulting sort state.
    Simulate(SimulateArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Profile name (see `thsort profiles`).
    #[arg(value_name = "PROFILE")]
    pub profile: String,

    /// Read the header block from a file instead of the profile (`-` for stdin).
    #[arg(long = "input", short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Header cell element name (e.g. `TableHead`, `th`).
    #[arg(long = "tag", value_name = "TAG")]
    pub tag: Option<CellTag>,

    /// Column key that stays unsortable; repeat for several (replaces the profile's list).
    #[arg(long = "exclude", value_name = "KEY")]
    pub exclude: Vec<ColumnKey>,

    /// How a click changes the sort direction.
    #[arg(long = "toggle", value_enum)]
    pub toggle: Option<ToggleArg>,

    /// Print a run summary to stderr.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Parser)]
pub struct ProfilesArgs {
    /// Print profiles as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Profile name (see `thsort profiles`).
    #[arg(value_name = "PROFILE")]
    pub profile: String,
}

#[derive(Parser)]
pub struct SimulateArgs {
    /// Column keys clicked, in order (comma separated).
    #[arg(long = "clicks", value_name = "KEYS", value_delimiter = ',', required = true)]
    pub clicks: Vec<ColumnKey>,

    /// How a click changes the sort direction.
    #[arg(long = "toggle", value_enum, default_value = "always-flip")]
    pub toggle: ToggleArg,
}

/// CLI toggle mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ToggleArg {
    /// Every click flips the direction (matches existing views).
    AlwaysFlip,
    /// A newly selected column starts ascending.
    ResetOnChange,
}

impl From<ToggleArg> for ToggleMode {
    fn from(value: ToggleArg) -> Self {
        match value {
            ToggleArg::AlwaysFlip => ToggleMode::AlwaysFlip,
            ToggleArg::ResetOnChange => ToggleMode::ResetOnChange,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
