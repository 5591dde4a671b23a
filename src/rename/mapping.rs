use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ToolError;

/// One row of the mapping file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub old: String,
    pub new: String,
}

/// Read a mapping CSV from disk
pub fn load_mapping(path: &Path) -> Result<Vec<RenameEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read mapping file: {}", path.display()))?;
    Ok(parse_mapping(&text, path)?)
}

/// Parse mapping CSV text with a header naming `old` and `new` columns.
///
/// Column order is free and extra columns are ignored. Rows where either
/// name is blank are dropped.
pub fn parse_mapping(text: &str, path: &Path) -> Result<Vec<RenameEntry>, ToolError> {
    let invalid = |message: &str| ToolError::InvalidMapping {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = parse_records(text).into_iter();

    let header = records.next().ok_or_else(|| invalid("missing header row"))?;
    let column = |name: &str| header.iter().position(|h| h.trim() == name);
    let (Some(old_col), Some(new_col)) = (column("old"), column("new")) else {
        return Err(invalid("header must name 'old' and 'new' columns"));
    };

    let entries = records
        .filter_map(|record| {
            let old = record.get(old_col).map(|s| s.trim()).unwrap_or_default();
            let new = record.get(new_col).map(|s| s.trim()).unwrap_or_default();
            (!old.is_empty() && !new.is_empty()).then(|| RenameEntry {
                old: old.to_string(),
                new: new.to_string(),
            })
        })
        .collect();

    Ok(entries)
}

/// Split CSV text into records of fields.
///
/// Handles double-quoted fields with embedded commas, newlines and `""`
/// escapes. Blank lines produce no record.
fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                if record.iter().any(|f| !f.is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        if record.iter().any(|f| !f.is_empty()) {
            records.push(record);
        }
    }

    records
}
