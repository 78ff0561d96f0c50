//! Implementation of the `propset show` command.

use propset_adapters::LocalFilesystem;
use propset_core::{
    application::ports::Filesystem as _,
    domain::{Entry, PropertiesStore},
};

use crate::{
    cli::{ShowArgs, ShowFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ShowArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let text = fs.read_to_string(&args.input).map_err(CliError::Core)?;
    let store = PropertiesStore::parse(&text).map_err(|e| CliError::Core(e.into()))?;

    // The flag wins; the config file can make active-only the default.
    let active_only = args.active_only || config.show.active_only;

    let entries: Vec<&Entry> = store
        .entries()
        .iter()
        .filter(|e| !active_only || e.is_active())
        .collect();

    match args.format {
        ShowFormat::Table => {
            output.header(&format!("{}:", args.input.display()))?;
            for entry in &entries {
                let marker = if entry.is_active() { " " } else { "#" };
                output.print(&format!("  {} {} = {}", marker, entry.key, entry.value))?;
            }
            output.print(&format!("  ({} entries)", entries.len()))?;
        }
        ShowFormat::List => {
            for entry in &entries {
                output.print(&entry.to_string())?;
            }
        }
        ShowFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("failed to serialize entries: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
