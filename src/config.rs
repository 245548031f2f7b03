//! Location of the compose file

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Path of the compose file relative to the directory holding the executable
const COMPOSE_RELATIVE_PATH: &str = "../dotfiles/.XCompose";

/// Get the default compose file path (`<exe dir>/../dotfiles/.XCompose`)
pub fn default_compose_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(resolve(exe_dir.join(COMPOSE_RELATIVE_PATH)))
}

/// Canonicalize a path when it exists
///
/// A missing path has its `.` and `..` components folded away, and its
/// parent directory canonicalized when that exists. The pipeline reports the
/// missing file later under this cleaned path.
pub fn resolve<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let cleaned = normalize_lexically(path);
    match (cleaned.parent(), cleaned.file_name()) {
        (Some(parent), Some(name)) => match parent.canonicalize() {
            Ok(parent) => parent.join(name),
            Err(_) => cleaned,
        },
        _ => cleaned,
    }
}

/// Fold `.` and `..` components without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
