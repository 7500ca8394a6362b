use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use qc_config::STATE_DIR;

/// Walk upwards from `start` until a `.qclist` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(STATE_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// The project an existing board lives in.
///
/// `--project` may name the project directory or its `.qclist` directory.
/// Without it the working directory and its parents are searched.
pub fn resolve_project_root(explicit: Option<&str>) -> anyhow::Result<PathBuf> {
    let Some(explicit) = explicit else {
        let cwd = std::env::current_dir().context("cannot read current directory")?;
        return find_project_root(&cwd).with_context(|| {
            format!(
                "no {STATE_DIR} directory in {} or its parents; run `qcl init` first",
                cwd.display()
            )
        });
    };

    let path = Path::new(explicit);
    if path.file_name() == Some(OsStr::new(STATE_DIR)) {
        return path
            .parent()
            .map(Path::to_path_buf)
            .with_context(|| format!("--project {explicit} has no parent directory"));
    }
    existing_dir(explicit)
}

/// The directory `qcl init` creates a board in.
pub fn init_root(explicit: Option<&str>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(explicit) => existing_dir(explicit),
        None => std::env::current_dir().context("cannot read current directory"),
    }
}

fn existing_dir(raw: &str) -> anyhow::Result<PathBuf> {
    let path = PathBuf::from(raw);
    if !path.is_dir() {
        anyhow::bail!("project directory {} does not exist", path.display());
    }
    Ok(path)
}
