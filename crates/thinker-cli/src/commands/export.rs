use crate::context::AppContext;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use thinker_core::{ExportFormat, ThinkerError};
use thinker_infrastructure::write_export;

/// Exports the current session, to a file in `output_dir` (or the
/// configured export directory) or to stdout.
pub fn run(
    ctx: &AppContext,
    format: ExportFormat,
    output_dir: Option<PathBuf>,
    to_stdout: bool,
) -> Result<()> {
    let store = ctx.read()?;
    let session = store.current_session().ok_or(ThinkerError::NoActiveSession)?;

    if to_stdout {
        print!("{}", format.render(session));
        return Ok(());
    }

    let dir = output_dir.unwrap_or_else(|| ctx.config.export_dir.clone());
    let path = write_export(&dir, session, format)
        .with_context(|| format!("Failed to export to {:?}", dir))?;
    println!("{} {}", "Exported to".green(), path.display().to_string().bold());
    Ok(())
}
