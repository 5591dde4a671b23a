use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Missing source: {0}")]
    SourceMissing(PathBuf),

    #[error("Destination exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Duplicate new name: {0}")]
    DuplicateName(String),

    #[error("Invalid rename mapping '{path}': {message}")]
    InvalidMapping { path: PathBuf, message: String },

    #[error("git mv '{src}' -> '{dst}' failed: {message}")]
    GitMove {
        src: PathBuf,
        dst: PathBuf,
        message: String,
    },
}
