use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use qc_core::export::{export_file_name, export_rows};
use qc_core::responses::ExportResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::filter_args::build_filter;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qcl export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(&args.filter, &ctx.config)?;
    let format = ctx.config.export.date_format()?;
    let rows = export_rows(ctx.store.board(), &filter, &format, &Local);

    let dir = output_dir(
        &ctx.project_root,
        args.output_dir.as_deref().unwrap_or(&ctx.config.export.output_dir),
    );
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(export_file_name(Local::now().date_naive()));

    qc_export::write_workbook(&rows, &path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            rows: u32::try_from(rows.len())?,
        },
        flags.format,
    )
}

/// Relative directories resolve against the project root.
fn output_dir(project_root: &Path, configured: &str) -> PathBuf {
    let configured = Path::new(configured);
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        project_root.join(configured)
    }
}
