mod args;

pub use args::{
    CliArgs, Command, CompressionLevel, Connectivity, IndexArgs, RefsArgs, RenameArgs, SliceArgs,
};
