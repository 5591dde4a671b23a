use image::RgbaImage;

/// Boolean foreground grid derived from a sheet's alpha channel
#[derive(Debug, Clone)]
pub struct ForegroundMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl ForegroundMask {
    /// A pixel is foreground iff its alpha is at least `threshold`
    pub fn from_alpha(image: &RgbaImage, threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let cells = image.pixels().map(|pixel| pixel[3] >= threshold).collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 7]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 8]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 255]));

        let mask = ForegroundMask::from_alpha(&img, 8);

        assert!(!mask.is_foreground(0, 0));
        assert!(mask.is_foreground(1, 0));
        assert!(mask.is_foreground(2, 0));
        assert_eq!(mask.foreground_count(), 2);
    }

    #[test]
    fn test_zero_threshold_marks_everything() {
        let img = RgbaImage::new(4, 4);
        let mask = ForegroundMask::from_alpha(&img, 0);
        assert_eq!(mask.foreground_count(), 16);
    }

    #[test]
    fn test_color_channels_ignored() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 200]));

        let mask = ForegroundMask::from_alpha(&img, 1);

        assert!(!mask.is_foreground(0, 0));
        assert!(mask.is_foreground(1, 0));
    }
}
