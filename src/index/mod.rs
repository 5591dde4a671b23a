//! HTML contact sheet for a folder of sprites.

mod html;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::error::ToolError;

pub use html::{escape_html, render_index};

/// List the PNG files directly inside `folder`, sorted by path
pub fn collect_pngs(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ToolError::InputNotFound(folder.to_path_buf()).into());
    }

    let pattern = format!(
        "{}/*.png",
        glob::Pattern::escape(&folder.to_string_lossy())
    );
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        let path = entry.with_context(|| format!("failed to read glob entry: {}", pattern))?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}

/// Write an HTML index of `folder`'s PNG files to `folder/out_name`
pub fn write_index(folder: &Path, out_name: &str) -> Result<PathBuf> {
    let pngs = collect_pngs(folder)?;
    debug!("Indexing {} images in {}", pngs.len(), folder.display());

    let names: Vec<String> = pngs
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    let title = folder.to_string_lossy().replace('\\', "/");
    let page = render_index(&title, &names);

    let out = folder.join(out_name);
    fs::write(&out, page).map_err(|e| ToolError::OutputWrite {
        path: out.clone(),
        source: e,
    })?;

    Ok(out)
}
