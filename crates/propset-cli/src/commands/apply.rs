//! Implementation of the `propset apply` command.
//!
//! Responsibility: translate CLI arguments into an `EditRequest`, call the
//! core edit service, and display results. No file-format logic lives here.

use tracing::{debug, info, instrument, warn};

use propset_adapters::LocalFilesystem;
use propset_core::application::{EditRequest, EditService};

use crate::{
    cli::{ApplyArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `propset apply` command.
///
/// Dispatch sequence:
/// 1. Validate the output path
/// 2. Convert CLI args to a core `EditRequest`
/// 3. Run the edit (dry-run stops after planning)
/// 4. Report changed/unchanged
#[instrument(skip_all, fields(output = %args.output.display()))]
pub fn execute(
    args: ApplyArgs,
    global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Output path sanity. The service checks this too; catching it here
    //    gives a clap-adjacent message before any I/O.
    if args.output.as_os_str().is_empty() {
        return Err(CliError::InvalidInput {
            message: "output file path is empty".into(),
            source: None,
        });
    }

    // 2. Build the request.
    let request = build_request(&args);

    debug!(
        input = ?args.input,
        upserts = request.upserts().len(),
        comment = request.comment_keys().len(),
        uncomment = request.uncomment_keys().len(),
        remove = request.remove_keys().len(),
        dry_run = args.dry_run,
        "Edit request built"
    );

    if request.is_noop() {
        warn!("Request contains no operations");
    }

    let service = EditService::new(Box::new(LocalFilesystem::new()));
    let input = args.input.as_deref();

    // 3. Dry run: plan but do not write.
    if args.dry_run {
        let outcome = service
            .plan(input, &args.output, &request)
            .with_cli_context(|| "planning edits")?;

        output.info(&format!(
            "Dry run: would write {} ({})",
            args.output.display(),
            if outcome.changed { "changed" } else { "unchanged" },
        ))?;
        if !global.quiet {
            for line in outcome.text.lines() {
                output.print(&format!("  {line}"))?;
            }
        }
        return Ok(());
    }

    // 4. Apply and report.
    info!(output = %args.output.display(), "Edit started");
    let outcome = service
        .apply(input, &args.output, &request)
        .with_cli_context(|| "applying edits")?;

    if outcome.changed {
        output.success(&format!("Updated {}", args.output.display()))?;
    } else {
        output.print(&format!("Unchanged {}", args.output.display()))?;
    }

    Ok(())
}

/// Convert CLI argument groups into the core request type.
///
/// Repeated `--set` flags for the same key are first-seen-wins, matching the
/// builder's upsert semantics.
fn build_request(args: &ApplyArgs) -> EditRequest {
    let mut builder = EditRequest::builder();

    for pair in &args.set {
        builder = builder.set(&pair.key, &pair.value);
    }
    for key in &args.comment {
        builder = builder.comment(key);
    }
    for key in &args.uncomment {
        builder = builder.uncomment(key);
    }
    for key in &args.remove {
        builder = builder.remove(key);
    }

    builder.build()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
