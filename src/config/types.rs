use serde::{Deserialize, Serialize};

use crate::cli::CompressionLevel;

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl CompressConfig {
    /// Validate against the same rules as `--compress`.
    pub fn to_level(&self) -> Result<CompressionLevel, String> {
        match self {
            CompressConfig::Level(n) => n.to_string().parse(),
            CompressConfig::Max(s) => s.parse(),
        }
    }
}

/// Slice configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet to slice
    pub input: Option<String>,
    /// Output directory for sliced sprites
    pub output_dir: Option<String>,
    /// Alpha threshold (0-255), inclusive
    pub alpha: u8,
    /// Padding around each crop in pixels
    pub padding: u32,
    /// Minimum component pixel area to export
    pub min_area: u64,
    /// Maximum number of sprites to export, 0 = unlimited
    pub max_count: usize,
    /// Pixel adjacency: "four" or "eight"
    pub connectivity: String,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    /// Write sprites.json next to the sprites
    pub manifest: bool,
    /// Remove a previous run's sprites before writing
    pub clean: bool,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            output_dir: None,
            alpha: 8,
            padding: 2,
            min_area: 300,
            max_count: 0,
            connectivity: "four".to_string(),
            compress: None,
            manifest: false,
            clean: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: SliceConfig = serde_json::from_str(r#"{ "min_area": 500 }"#).unwrap();
        assert_eq!(config.min_area, 500);
        assert_eq!(config.alpha, 8);
        assert_eq!(config.padding, 2);
        assert_eq!(config.max_count, 0);
        assert_eq!(config.connectivity, "four");
        assert!(config.input.is_none());
    }

    #[test]
    fn test_compress_variants() {
        let level: SliceConfig = serde_json::from_str(r#"{ "compress": 3 }"#).unwrap();
        assert!(matches!(level.compress, Some(CompressConfig::Level(3))));

        let max: SliceConfig = serde_json::from_str(r#"{ "compress": "max" }"#).unwrap();
        assert!(matches!(max.compress, Some(CompressConfig::Max(_))));
    }

    #[test]
    fn test_compress_values_validated_like_cli() {
        let level = CompressConfig::Level(6);
        assert_eq!(level.to_level(), Ok(CompressionLevel::Level(6)));
        assert_eq!(CompressConfig::Max("MAX".into()).to_level(), Ok(CompressionLevel::Max));

        assert!(CompressConfig::Level(9).to_level().is_err());
        assert!(CompressConfig::Max("fast".into()).to_level().is_err());
    }

    #[test]
    fn test_alpha_out_of_range_rejected() {
        assert!(serde_json::from_str::<SliceConfig>(r#"{ "alpha": 300 }"#).is_err());
    }
}
