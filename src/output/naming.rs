use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::error::ToolError;

/// File name of the sprite exported at `index`: sprite_0000.png, sprite_0001.png, ...
pub fn sprite_file_name(index: usize) -> String {
    format!("sprite_{:04}.png", index)
}

/// Check whether a file name looks like one written by `sprite_file_name`
pub fn is_sprite_file_name(name: &str) -> bool {
    name.strip_prefix("sprite_")
        .and_then(|rest| rest.strip_suffix(".png"))
        .map(|digits| digits.len() >= 4 && digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

/// Delete sprite files left in `dir` by an earlier run, returning how many were removed.
///
/// Other files in the directory are left alone.
pub fn remove_previous_sprites(dir: &Path) -> Result<usize> {
    let mut removed = 0;

    for entry in fs::read_dir(dir)
        .with_context(|| format!("failed to read output directory: {}", dir.display()))?
    {
        let path = entry?.path();
        let is_sprite = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(is_sprite_file_name);

        if is_sprite && path.is_file() {
            fs::remove_file(&path).map_err(|e| ToolError::OutputWrite {
                path: path.clone(),
                source: e,
            })?;
            debug!("Removed {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_file_name() {
        assert_eq!(sprite_file_name(0), "sprite_0000.png");
        assert_eq!(sprite_file_name(42), "sprite_0042.png");
        assert_eq!(sprite_file_name(12345), "sprite_12345.png");
    }

    #[test]
    fn test_is_sprite_file_name() {
        assert!(is_sprite_file_name("sprite_0000.png"));
        assert!(is_sprite_file_name("sprite_12345.png"));
        assert!(!is_sprite_file_name("sprite_12.png"));
        assert!(!is_sprite_file_name("sprite_abcd.png"));
        assert!(!is_sprite_file_name("hero_0001.png"));
        assert!(!is_sprite_file_name("sprite_0001.jpg"));
    }

    #[test]
    fn test_remove_previous_sprites_keeps_other_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["sprite_0000.png", "sprite_0001.png", "hero.png", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let removed = remove_previous_sprites(dir.path()).unwrap();

        assert_eq!(removed, 2);
        assert!(!dir.path().join("sprite_0000.png").exists());
        assert!(dir.path().join("hero.png").exists());
        assert!(dir.path().join("notes.txt").exists());
    }
}
