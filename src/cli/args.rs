use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sprite-tools")]
#[command(version, about = "Sprite asset pipeline tools", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Slice a sprite sheet into individual sprites along transparent gaps
    Slice(SliceArgs),
    /// Generate an HTML index page of the PNG files in a folder
    Index(IndexArgs),
    /// Scan source files for .png references and check they exist
    Refs(RefsArgs),
    /// Rename asset files from an old,new CSV mapping
    Rename(RenameArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SliceArgs {
    /// Input sprite sheet (RGBA recommended)
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Output directory for the sliced sprites
    #[arg(required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Load settings from a JSON slice config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Alpha threshold (0-255); pixels at or above it are foreground [default: 8]
    #[arg(long, value_name = "N")]
    pub alpha: Option<u8>,

    /// Padding around each crop in pixels [default: 2]
    #[arg(long, value_name = "N")]
    pub pad: Option<u32>,

    /// Minimum component pixel area to export [default: 300]
    #[arg(long, value_name = "N")]
    pub min_area: Option<u64>,

    /// Maximum number of sprites to export, 0 = unlimited [default: 0]
    #[arg(long, value_name = "N")]
    pub max_count: Option<usize>,

    /// Pixel adjacency used to group foreground pixels [default: four]
    #[arg(long, value_enum)]
    pub connectivity: Option<Connectivity>,

    /// Write sprites.json describing every exported sprite
    #[arg(long)]
    pub manifest: bool,

    /// Remove sprite_NNNN.png files left by a previous run before writing
    #[arg(long)]
    pub clean: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Folder with png files, e.g. public/assets/v1/battle
    pub folder: PathBuf,

    /// File name of the generated page, written inside the folder
    #[arg(long, default_value = "sprite_index.html")]
    pub out: String,
}

#[derive(Args, Debug, Clone)]
pub struct RefsArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Public directory, relative to the root
    #[arg(long, default_value = "public")]
    pub public: PathBuf,

    /// Only include paths containing /assets/v1/
    #[arg(long)]
    pub only_assets_v1: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Target folder, e.g. public/assets/v1/battle
    pub folder: PathBuf,

    /// CSV file with old,new columns
    pub csv: PathBuf,

    /// Print the renames without performing them
    #[arg(long)]
    pub dry: bool,
}

/// Which neighbouring pixels join a connected component
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Orthogonal neighbours only (up, down, left, right)
    #[default]
    #[value(name = "four")]
    Four,
    /// Orthogonal and diagonal neighbours
    #[value(name = "eight")]
    Eight,
}

impl Connectivity {
    pub fn as_str(self) -> &'static str {
        match self {
            Connectivity::Four => "four",
            Connectivity::Eight => "eight",
        }
    }
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
