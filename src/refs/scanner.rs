use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::ToolError;

/// File extensions whose contents are scanned
pub const SCAN_EXTENSIONS: &[&str] = &["js", "ts", "jsx", "tsx", "css", "html", "json", "md"];

/// Directory names never descended into
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules", ".venv", "dist", "build"];

/// A png path between quotes or parentheses, as in JS strings and CSS url()
const PNG_REFERENCE_PATTERN: &str = r#"(?i)(['"(])([^'")\s]+?\.png)(['")])"#;

/// Collects png references and the files that use them
pub struct ReferenceScanner {
    pattern: Regex,
    only_assets_v1: bool,
    /// reference -> files (relative to the root) that mention it
    refs: BTreeMap<String, BTreeSet<String>>,
}

impl ReferenceScanner {
    pub fn new(only_assets_v1: bool) -> Result<Self> {
        let pattern =
            Regex::new(PNG_REFERENCE_PATTERN).context("failed to compile png reference pattern")?;
        Ok(Self {
            pattern,
            only_assets_v1,
            refs: BTreeMap::new(),
        })
    }

    /// Extract the png paths referenced in `text`, backslashes normalised to '/'
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(2))
            .map(|m| m.as_str().replace('\\', "/"))
            .filter(|p| !self.only_assets_v1 || p.contains("/assets/v1/"))
            .collect()
    }

    /// Record every reference found in `text` as used by `source`
    pub fn add_text(&mut self, source: &str, text: &str) {
        for reference in self.extract(text) {
            self.refs
                .entry(reference)
                .or_default()
                .insert(source.to_string());
        }
    }

    /// Walk `root` recursively and scan every matching source file.
    /// Symlinked directories are not descended into.
    pub fn scan_tree(&mut self, root: &Path) -> Result<()> {
        if !root.is_dir() {
            return Err(ToolError::InputNotFound(root.to_path_buf()).into());
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !is_scanned_file(path) {
                continue;
            }

            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    debug!("Skipping unreadable {}: {}", path.display(), e);
                    continue;
                }
            };
            let source = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            self.add_text(&source, &String::from_utf8_lossy(&bytes));
        }

        Ok(())
    }

    pub fn references(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.refs
    }

    pub fn into_references(self) -> BTreeMap<String, BTreeSet<String>> {
        self.refs
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

fn is_scanned_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SCAN_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
