pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod refs;
pub mod rename;
pub mod slice;

pub use cli::{CliArgs, Command, Connectivity};
pub use error::ToolError;
pub use slice::{ExportOptions, SheetSlicer, SliceReport};
