//! Batch renaming of asset files from an old,new CSV mapping.

mod apply;
mod mapping;

pub use apply::{MoveStrategy, apply_renames, precheck};
pub use mapping::{RenameEntry, load_mapping, parse_mapping};
