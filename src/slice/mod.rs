mod component;
mod label;
mod loader;
mod mask;
mod rect;
mod slicer;

pub use component::{Component, area_within, components, find_bounds};
pub use label::{LabelMap, label_components};
pub use loader::load_sheet;
pub use mask::ForegroundMask;
pub use rect::Rect;
pub use slicer::{
    DEFAULT_ALPHA_THRESHOLD, DEFAULT_MIN_AREA, DEFAULT_PADDING, ExportOptions, SheetSlicer,
    SlicePlan, SliceReport, SpriteCrop,
};
