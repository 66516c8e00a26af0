//! File-based probing.
//!
//! Existence checks use [`Path::try_exists`] so that permission and I/O
//! failures surface as errors. A path whose parent is a regular file reads
//! as absent, the same as a missing path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Check if a file exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> io::Result<bool> {
    match project_root.join(file).try_exists() {
        Err(e) if is_absent(&e) => Ok(false),
        result => result,
    }
}

/// Return the first candidate that exists, in the order given.
pub fn first_existing<'a>(
    project_root: &Path,
    candidates: &[&'a str],
) -> io::Result<Option<&'a str>> {
    for &candidate in candidates {
        if file_exists(project_root, candidate)? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Canonicalize the longest existing prefix of `path` and re-append the
/// rest, so paths that do not exist yet still resolve symlinks above them.
pub fn canonicalize_existing(path: &Path) -> io::Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();

    loop {
        match fs::canonicalize(existing) {
            Ok(canonical) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(canonical, |acc: PathBuf, name| acc.join(name)));
            }
            Err(e) if is_absent(&e) => match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
                    missing.push(name.to_os_string());
                    existing = parent;
                }
                _ => return Ok(path.to_path_buf()),
            },
            Err(e) => return Err(e),
        }
    }
}
