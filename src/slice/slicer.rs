use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{RgbaImage, imageops};
use log::{debug, info, warn};

use super::{Component, ForegroundMask, Rect, components, label_components, load_sheet};
use crate::cli::{CompressionLevel, Connectivity};
use crate::error::ToolError;
use crate::output::{remove_previous_sprites, save_sprite_image, sprite_file_name, write_manifest};

pub const DEFAULT_ALPHA_THRESHOLD: u8 = 8;
pub const DEFAULT_PADDING: u32 = 2;
pub const DEFAULT_MIN_AREA: u64 = 300;

/// Settings for cutting a sheet into sprites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSlicer {
    pub alpha_threshold: u8,
    pub padding: u32,
    pub min_area: u64,
    /// 0 means unlimited
    pub max_count: usize,
    pub connectivity: Connectivity,
}

/// Options that only affect how sprites are written
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub compress: Option<CompressionLevel>,
    pub manifest: bool,
    pub clean: bool,
}

/// A component selected for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteCrop {
    /// Export index, also the number in the file name
    pub index: usize,
    pub component: Component,
    /// Padded and clamped region of the sheet to copy
    pub frame: Rect,
}

impl SpriteCrop {
    pub fn file_name(&self) -> String {
        sprite_file_name(self.index)
    }
}

/// Everything decided about a sheet before any file is written
#[derive(Debug, Clone)]
pub struct SlicePlan {
    pub sheet_width: u32,
    pub sheet_height: u32,
    /// Components found by labeling, including ones too small to export
    pub components_found: u32,
    pub crops: Vec<SpriteCrop>,
}

/// Outcome of an export run
#[derive(Debug, Clone)]
pub struct SliceReport {
    pub sheet: PathBuf,
    pub output_dir: PathBuf,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub components_found: u32,
    pub sprites: Vec<SpriteCrop>,
}

impl SliceReport {
    pub fn exported(&self) -> usize {
        self.sprites.len()
    }
}

impl Default for SheetSlicer {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            padding: DEFAULT_PADDING,
            min_area: DEFAULT_MIN_AREA,
            max_count: 0,
            connectivity: Connectivity::Four,
        }
    }
}

impl SheetSlicer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha_threshold(mut self, alpha_threshold: u8) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn min_area(mut self, min_area: u64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Decide which components become sprites and where each crop lies.
    ///
    /// Components are visited in label order. Once `max_count` sprites are
    /// selected the remaining components are not inspected.
    pub fn plan(&self, sheet: &RgbaImage) -> SlicePlan {
        let (sheet_width, sheet_height) = sheet.dimensions();
        let mask = ForegroundMask::from_alpha(sheet, self.alpha_threshold);
        let labels = label_components(&mask, self.connectivity);

        debug!(
            "{} foreground pixels in {} components",
            mask.foreground_count(),
            labels.count()
        );

        let mut crops = Vec::new();
        for component in components(&labels) {
            if component.area < self.min_area {
                debug!(
                    "Skipping component {} (area {} < {})",
                    component.label, component.area, self.min_area
                );
                continue;
            }

            let frame = component
                .bounds
                .expand_clamped(self.padding, sheet_width, sheet_height);
            crops.push(SpriteCrop {
                index: crops.len(),
                component,
                frame,
            });

            if self.max_count > 0 && crops.len() >= self.max_count {
                break;
            }
        }

        SlicePlan {
            sheet_width,
            sheet_height,
            components_found: labels.count(),
            crops,
        }
    }

    /// Load `sheet_path`, slice it and write the sprites into `output_dir`.
    ///
    /// The output directory is created when missing. Sprites written before a
    /// failure stay on disk.
    pub fn export(
        &self,
        sheet_path: &Path,
        output_dir: &Path,
        options: &ExportOptions,
    ) -> Result<SliceReport> {
        let sheet = load_sheet(sheet_path)?;

        fs::create_dir_all(output_dir).map_err(|e| ToolError::OutputDir {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        if options.clean {
            let removed = remove_previous_sprites(output_dir)?;
            if removed > 0 {
                info!("Removed {} sprites from a previous run", removed);
            }
        }

        let plan = self.plan(&sheet);
        if plan.components_found == 0 {
            warn!("No components found. Check alpha threshold.");
        } else {
            info!(
                "Found {} components, {} to export",
                plan.components_found,
                plan.crops.len()
            );
        }

        for crop in &plan.crops {
            let frame = crop.frame;
            let sprite =
                imageops::crop_imm(&sheet, frame.x, frame.y, frame.width, frame.height).to_image();
            let path = output_dir.join(crop.file_name());
            save_sprite_image(&sprite, &path, options.compress)?;
            debug!(
                "Saved {} ({}x{} @ {},{})",
                path.display(),
                frame.width,
                frame.height,
                frame.x,
                frame.y
            );
        }

        let report = SliceReport {
            sheet: sheet_path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            sheet_width: plan.sheet_width,
            sheet_height: plan.sheet_height,
            components_found: plan.components_found,
            sprites: plan.crops,
        };

        if options.manifest {
            write_manifest(&report, self)?;
        }

        Ok(report)
    }
}
