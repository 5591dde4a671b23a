use std::fs;

use anyhow::Result;
use serde::Serialize;

use crate::error::ToolError;
use crate::slice::{Rect, SheetSlicer, SliceReport, SpriteCrop};

pub const MANIFEST_FILE_NAME: &str = "sprites.json";

#[derive(Serialize)]
struct ManifestOutput {
    meta: Meta,
    sheet: Sheet,
    settings: Settings,
    sprites: Vec<ManifestSprite>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Sheet {
    image: String,
    size: Size,
    components: u32,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Settings {
    alpha_threshold: u8,
    padding: u32,
    min_area: u64,
    max_count: usize,
    connectivity: &'static str,
}

#[derive(Serialize)]
struct ManifestSprite {
    file: String,
    label: u32,
    area: u64,
    bounds: Rect,
    frame: Rect,
}

/// Write sprites.json describing every exported sprite of a slice run
pub fn write_manifest(report: &SliceReport, slicer: &SheetSlicer) -> Result<()> {
    let output = ManifestOutput {
        meta: Meta {
            app: "sprite-tools",
            version: env!("CARGO_PKG_VERSION"),
        },
        sheet: Sheet {
            image: report.sheet.to_string_lossy().replace('\\', "/"),
            size: Size {
                w: report.sheet_width,
                h: report.sheet_height,
            },
            components: report.components_found,
        },
        settings: Settings {
            alpha_threshold: slicer.alpha_threshold,
            padding: slicer.padding,
            min_area: slicer.min_area,
            max_count: slicer.max_count,
            connectivity: slicer.connectivity.as_str(),
        },
        sprites: report.sprites.iter().map(sprite_to_json).collect(),
    };

    let json_path = report.output_dir.join(MANIFEST_FILE_NAME);
    let content = serde_json::to_string_pretty(&output)?;

    fs::write(&json_path, content).map_err(|e| ToolError::OutputWrite {
        path: json_path,
        source: e,
    })?;

    Ok(())
}

fn sprite_to_json(crop: &SpriteCrop) -> ManifestSprite {
    ManifestSprite {
        file: crop.file_name(),
        label: crop.component.label,
        area: crop.component.area,
        bounds: crop.component.bounds,
        frame: crop.frame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::Component;
    use std::path::PathBuf;

    #[test]
    fn test_manifest_contents() {
        let dir = tempfile::tempdir().unwrap();
        let report = SliceReport {
            sheet: PathBuf::from("sheets/ui.png"),
            output_dir: dir.path().to_path_buf(),
            sheet_width: 64,
            sheet_height: 32,
            components_found: 3,
            sprites: vec![SpriteCrop {
                index: 0,
                component: Component {
                    label: 2,
                    area: 350,
                    bounds: Rect::new(4, 4, 20, 20),
                },
                frame: Rect::new(2, 2, 24, 24),
            }],
        };

        write_manifest(&report, &SheetSlicer::new()).unwrap();

        let text = fs::read_to_string(dir.path().join(MANIFEST_FILE_NAME)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["meta"]["app"], "sprite-tools");
        assert_eq!(json["sheet"]["image"], "sheets/ui.png");
        assert_eq!(json["sheet"]["components"], 3);
        assert_eq!(json["settings"]["minArea"], 300);
        assert_eq!(json["settings"]["connectivity"], "four");
        assert_eq!(json["sprites"][0]["file"], "sprite_0000.png");
        assert_eq!(json["sprites"][0]["label"], 2);
        assert_eq!(json["sprites"][0]["frame"]["width"], 24);
    }
}
