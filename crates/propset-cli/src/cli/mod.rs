//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "propset",
    bin_name = "propset",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2699} Declarative .properties file editing",
    long_about = "Propset applies a declarative set of edits (upserts, \
                  comment/uncomment, removals) to Java-style .properties \
                  files. The same input and the same edit set always \
                  produce the same output file.",
    after_help = "EXAMPLES:\n\
        \x20 propset apply -o app.properties -s server.port=8080 -s db.host=localhost\n\
        \x20 propset apply -i app.properties -o app.properties -c debug.enabled -r legacy.key\n\
        \x20 propset show -i app.properties --format json\n\
        \x20 propset completions bash > /usr/share/bash-completion/completions/propset",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a set of edits to a properties file.
    #[command(
        visible_alias = "a",
        about = "Apply edits to a properties file",
        after_help = "EXAMPLES:\n\
            \x20 propset apply -o new.properties -s key1=val1 -s key2=val2\n\
            \x20 propset apply -i app.properties -o app.properties -u key1 -c key2\n\
            \x20 propset apply -i app.properties -o app.properties -r obsolete.key --dry-run"
    )]
    Apply(ApplyArgs),

    /// Parse a properties file and print its entries.
    #[command(
        visible_alias = "s",
        about = "Show the entries of a properties file",
        after_help = "EXAMPLES:\n\
            \x20 propset show -i app.properties\n\
            \x20 propset show -i app.properties --format json\n\
            \x20 propset show -i app.properties --active-only"
    )]
    Show(ShowArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 propset completions bash > ~/.local/share/bash-completion/completions/propset\n\
            \x20 propset completions zsh  > ~/.zfunc/_propset\n\
            \x20 propset completions fish > ~/.config/fish/completions/propset.fish"
    )]
    Completions(CompletionsArgs),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `propset apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Where the edited result is written.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (always required)"
    )]
    pub output: PathBuf,

    /// Existing file to edit. Omit to start from scratch, in which case at
    /// least one `--set` is required.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input file to edit (omit to start from scratch)"
    )]
    pub input: Option<PathBuf>,

    /// Insert or update a property.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_key_val,
        help = "Upsert KEY to VALUE (repeatable; first occurrence of a key wins)"
    )]
    pub set: Vec<KeyValue>,

    /// Comment out a property (prefix its line with `#`).
    #[arg(
        short = 'c',
        long = "comment",
        value_name = "KEY",
        help = "Comment out KEY (repeatable; absent keys are ignored)"
    )]
    pub comment: Vec<String>,

    /// Uncomment a property (drop its leading `#`).
    #[arg(
        short = 'u',
        long = "uncomment",
        value_name = "KEY",
        help = "Uncomment KEY (repeatable; absent keys are ignored)"
    )]
    pub uncomment: Vec<String>,

    /// Remove a property line entirely.
    #[arg(
        short = 'r',
        long = "remove",
        value_name = "KEY",
        help = "Remove KEY (repeatable; absent keys are ignored)"
    )]
    pub remove: Vec<String>,

    /// Print the would-be result without writing any file.
    #[arg(long = "dry-run", help = "Show the result without writing")]
    pub dry_run: bool,
}

/// One validated `KEY=VALUE` pair from `--set`.
///
/// Split on the first `=`, the same delimiter rule the file format uses; the
/// value may itself contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

fn parse_key_val(s: &str) -> Result<KeyValue, String> {
    match s.split_once('=') {
        Some((key, value)) => Ok(KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
        None => Err(format!("'{s}' is not in KEY=VALUE form (no '=' found)")),
    }
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `propset show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// File to read.
    #[arg(short = 'i', long = "input", value_name = "FILE", help = "File to read")]
    pub input: PathBuf,

    /// Hide commented-out entries.
    #[arg(long = "active-only", help = "Show only uncommented entries")]
    pub active_only: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ShowFormat,
}

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShowFormat {
    /// Human-readable table.
    Table,
    /// One `key=value` line per entry, as in the file.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `propset completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
