use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::ToolError;

/// Save a sprite image as RGBA PNG, optionally recompressed with oxipng
pub fn save_sprite_image(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| ToolError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            ToolError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| ToolError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample_sprite() -> RgbaImage {
        let mut img = RgbaImage::new(6, 4);
        img.put_pixel(1, 1, Rgba([10, 20, 30, 128]));
        img.put_pixel(4, 2, Rgba([200, 100, 50, 255]));
        img
    }

    #[test]
    fn test_save_preserves_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        let img = sample_sprite();

        save_sprite_image(&img, &path, None).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_save_compressed_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        let img = sample_sprite();

        save_sprite_image(&img, &path, Some(CompressionLevel::Level(1))).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sprite.png");

        let err = save_sprite_image(&sample_sprite(), &path, None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ToolError>(),
            Some(ToolError::OutputWrite { .. })
        ));
    }
}
