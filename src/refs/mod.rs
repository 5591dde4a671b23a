//! Find `.png` path literals in project sources and check they resolve.

mod report;
mod scanner;

pub use report::{RefEntry, RefStatus, build_report, format_report, resolve_reference};
pub use scanner::{ReferenceScanner, SCAN_EXTENSIONS, SKIP_DIRS};
