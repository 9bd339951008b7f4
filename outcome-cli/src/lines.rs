//! `outcome lines`: print every line of every file below a directory.
//!
//! Listing a directory entry or reading a file can fail; such failures are
//! logged and skipped. Only a root that cannot be walked at all fails the
//! command.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use outcome_core::{Error, Outcome};
use walkdir::{DirEntry, WalkDir};

/// Regular files below `root`, sorted by name within each directory.
///
/// The root itself is opened eagerly, so a missing or unreadable root fails
/// the whole listing. Entries below it that cannot be listed are logged and
/// skipped.
pub fn list_files(root: &Path) -> Outcome<Vec<PathBuf>> {
    Outcome::from_fn(|| -> outcome_error::Result<Vec<PathBuf>> {
        let path = root.display().to_string();
        if !fs::metadata(root)?.is_dir() {
            return Err(Error::invalid_argument("not a directory").with_context("path", path));
        }
        fs::read_dir(root).map_err(|e| Error::from(e).with_context("path", path))?;

        let files = walk(root)
            .filter_map(|entry| entry.if_error(|e| log::warn!("{}", e)).as_optional())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect();
        Ok(files)
    })
}

/// Every entry below `root`, with listing failures wrapped but kept.
fn walk(root: &Path) -> impl Iterator<Item = Outcome<DirEntry>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| Outcome::from(entry).wrap_error(Error::wrapped, "failed to list entry"))
}

/// All lines of `path`. Non UTF-8 content is a failure like any other IO error.
pub fn read_lines(path: &Path) -> Outcome<Vec<String>> {
    Outcome::<_, Error>::from_fn(|| -> std::io::Result<Vec<String>> {
        BufReader::new(File::open(path)?).lines().collect()
    })
    .map_error(|e| e.with_context("path", path.display().to_string()))
}

/// Lines of every readable file below `root`, in walk order.
pub fn all_lines(root: &Path) -> Outcome<Vec<String>> {
    list_files(root).map(|files| {
        files
            .iter()
            .flat_map(|path| {
                read_lines(path)
                    .if_success(|lines| {
                        log::debug!("read {} lines from {}", lines.len(), path.display())
                    })
                    .if_error(|e| log::warn!("failed to read file: {}", e))
                    .get_or_else(Vec::new())
            })
            .collect()
    })
}
