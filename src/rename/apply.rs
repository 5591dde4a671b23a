use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use log::info;

use super::RenameEntry;
use crate::error::ToolError;

/// How files are moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// `git mv`, so history follows the file
    Git,
    /// Plain filesystem rename
    Filesystem,
}

impl MoveStrategy {
    /// Use git when `root` is the top of a git work tree
    pub fn detect(root: &Path) -> Self {
        if root.join(".git").exists() {
            MoveStrategy::Git
        } else {
            MoveStrategy::Filesystem
        }
    }
}

/// Validate every rename before any file is touched
pub fn precheck(folder: &Path, entries: &[RenameEntry]) -> Result<(), ToolError> {
    let mut seen_new = HashSet::new();

    for entry in entries {
        let src = folder.join(&entry.old);
        let dst = folder.join(&entry.new);

        if !src.exists() {
            return Err(ToolError::SourceMissing(src));
        }
        if dst.exists() {
            return Err(ToolError::DestinationExists(dst));
        }
        if !seen_new.insert(entry.new.as_str()) {
            return Err(ToolError::DuplicateName(entry.new.clone()));
        }
    }

    Ok(())
}

/// Check the mapping, then rename each file in order.
///
/// With `dry` set nothing is moved. Returns the (source, destination) pairs.
pub fn apply_renames(
    folder: &Path,
    entries: &[RenameEntry],
    dry: bool,
    strategy: MoveStrategy,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    precheck(folder, entries)?;

    let mut moved = Vec::with_capacity(entries.len());
    for entry in entries {
        let src = folder.join(&entry.old);
        let dst = folder.join(&entry.new);
        info!(
            "{}{} -> {}",
            if dry { "DRY " } else { "" },
            src.display(),
            dst.display()
        );

        if !dry {
            match strategy {
                MoveStrategy::Git => git_mv(&src, &dst)?,
                MoveStrategy::Filesystem => {
                    fs::rename(&src, &dst).map_err(|e| ToolError::OutputWrite {
                        path: dst.clone(),
                        source: e,
                    })?
                }
            }
        }
        moved.push((src, dst));
    }

    Ok(moved)
}

fn git_mv(src: &Path, dst: &Path) -> Result<(), ToolError> {
    let failed = |message: String| ToolError::GitMove {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        message,
    };

    let output = Command::new("git")
        .arg("mv")
        .arg(src)
        .arg(dst)
        .output()
        .map_err(|e| failed(e.to_string()))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(failed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
