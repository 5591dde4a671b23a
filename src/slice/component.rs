use serde::Serialize;

use super::{LabelMap, Rect};

/// A labeled connected component of foreground pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Label assigned by the labeling pass (1-based)
    pub label: u32,
    /// Number of pixels carrying this label
    pub area: u64,
    /// Tight bounding box
    pub bounds: Rect,
}

/// Tight bounding box of every label, indexed by `label - 1`.
///
/// `None` marks a label with no pixels, which cannot happen for a map built
/// by `label_components` but keeps lookups total.
pub fn find_bounds(labels: &LabelMap) -> Vec<Option<Rect>> {
    // (min_x, min_y, max_x, max_y), inclusive
    let mut corners: Vec<Option<(u32, u32, u32, u32)>> = vec![None; labels.count() as usize];

    for y in 0..labels.height() {
        for x in 0..labels.width() {
            let label = labels.label_at(x, y);
            if label == 0 {
                continue;
            }

            let slot = &mut corners[label as usize - 1];
            *slot = Some(match *slot {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        }
    }

    corners
        .into_iter()
        .map(|c| c.map(|(min_x, min_y, max_x, max_y)| Rect::from_corners(min_x, min_y, max_x, max_y)))
        .collect()
}

/// Count pixels inside `bounds` that carry `label`.
///
/// A bounding box can overlap pixels of other components (an L-shape wrapping
/// a smaller sprite), so the box's own area is not the component's area.
pub fn area_within(labels: &LabelMap, label: u32, bounds: &Rect) -> u64 {
    let mut area = 0u64;
    for y in bounds.y..bounds.bottom() {
        for x in bounds.x..bounds.right() {
            if labels.label_at(x, y) == label {
                area += 1;
            }
        }
    }
    area
}

/// Lazily yield components in ascending label order.
///
/// Areas are only counted for components actually pulled from the iterator.
pub fn components(labels: &LabelMap) -> impl Iterator<Item = Component> + '_ {
    find_bounds(labels)
        .into_iter()
        .zip(1u32..)
        .filter_map(move |(bounds, label)| {
            bounds.map(|bounds| Component {
                label,
                area: area_within(labels, label, &bounds),
                bounds,
            })
        })
}
