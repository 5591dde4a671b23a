use super::ForegroundMask;
use crate::cli::Connectivity;

const FOUR_NEIGHBORS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const EIGHT_NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Per-pixel component labels; 0 is background, components are numbered from 1
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of components found
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn label_at(&self, x: u32, y: u32) -> u32 {
        self.labels[y as usize * self.width as usize + x as usize]
    }
}

/// Label the connected components of a foreground mask.
///
/// Labels follow raster order: the component whose first pixel comes first
/// scanning top-to-bottom, left-to-right gets label 1, the next gets 2, and so on.
pub fn label_components(mask: &ForegroundMask, connectivity: Connectivity) -> LabelMap {
    let (width, height) = (mask.width(), mask.height());
    let neighbors: &[(i32, i32)] = match connectivity {
        Connectivity::Four => &FOUR_NEIGHBORS,
        Connectivity::Eight => &EIGHT_NEIGHBORS,
    };

    let mut labels = vec![0u32; width as usize * height as usize];
    let mut count = 0u32;
    let mut stack: Vec<(u32, u32)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let start = mask.index(x, y);
            if !mask.is_foreground(x, y) || labels[start] != 0 {
                continue;
            }

            count += 1;
            labels[start] = count;
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                for &(dx, dy) in neighbors {
                    let (Some(nx), Some(ny)) = (cx.checked_add_signed(dx), cy.checked_add_signed(dy))
                    else {
                        continue;
                    };
                    if nx >= width || ny >= height {
                        continue;
                    }

                    let idx = mask.index(nx, ny);
                    if mask.is_foreground(nx, ny) && labels[idx] == 0 {
                        labels[idx] = count;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }

    LabelMap {
        width,
        height,
        labels,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Build a mask from rows of '#' (foreground) and '.' (background)
    fn mask_from(rows: &[&str]) -> ForegroundMask {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut img = RgbaImage::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    img.put_pixel(x as u32, y as u32, Rgba([255, 255, 255, 255]));
                }
            }
        }
        ForegroundMask::from_alpha(&img, 1)
    }

    #[test]
    fn test_empty_mask_has_no_components() {
        let map = label_components(&mask_from(&["....", "...."]), Connectivity::Four);
        assert_eq!(map.count(), 0);
        assert_eq!(map.label_at(0, 0), 0);
    }

    #[test]
    fn test_diagonal_touch_four_connectivity() {
        let mask = mask_from(&["#.", ".#"]);

        let map = label_components(&mask, Connectivity::Four);

        assert_eq!(map.count(), 2);
        assert_eq!(map.label_at(0, 0), 1);
        assert_eq!(map.label_at(1, 1), 2);
    }

    #[test]
    fn test_diagonal_touch_eight_connectivity() {
        let mask = mask_from(&["#.", ".#"]);

        let map = label_components(&mask, Connectivity::Eight);

        assert_eq!(map.count(), 1);
        assert_eq!(map.label_at(0, 0), 1);
        assert_eq!(map.label_at(1, 1), 1);
    }

    #[test]
    fn test_labels_follow_raster_order_of_first_pixel() {
        // The right-hand shape starts on row 0, so it is labeled first even
        // though the left-hand shape sits further left.
        let mask = mask_from(&[
            "....##", //
            "#...##", //
            "#.....", //
            "#.....", //
        ]);

        let map = label_components(&mask, Connectivity::Four);

        assert_eq!(map.count(), 2);
        assert_eq!(map.label_at(4, 0), 1);
        assert_eq!(map.label_at(0, 1), 2);
    }

    #[test]
    fn test_u_shape_is_single_component() {
        // Both arms meet on the bottom row, after the scan has passed the second arm's top
        let mask = mask_from(&[
            "#..#", //
            "#..#", //
            "####", //
        ]);

        let map = label_components(&mask, Connectivity::Four);

        assert_eq!(map.count(), 1);
        assert_eq!(map.label_at(3, 0), 1);
    }

    #[test]
    fn test_every_foreground_pixel_labeled_once() {
        let mask = mask_from(&[
            "##..#", //
            "#..##", //
            "..#..", //
            "##..#", //
        ]);

        let map = label_components(&mask, Connectivity::Four);

        for y in 0..map.height() {
            for x in 0..map.width() {
                let label = map.label_at(x, y);
                assert_eq!(mask.is_foreground(x, y), label != 0);
                assert!(label <= map.count());
            }
        }
        assert_eq!(map.count(), 5);
    }
}
