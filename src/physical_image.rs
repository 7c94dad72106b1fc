use std::path::Path;

use image::RgbaImage;

use crate::error::PadError;

// A raster size paired with the real-world size it represents. Pixel density
// is derived, never stored, so the two can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalDimensions {
    pub width_px: u32,
    pub height_px: u32,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PhysicalDimensions {
    // Target panel the padded picture is shown on.
    pub const LCD_1360X768: PhysicalDimensions = PhysicalDimensions {
        width_px: 1360,
        height_px: 768,
        width_mm: 412.0,
        height_mm: 233.0,
    };

    pub fn new(
        width_px: u32,
        height_px: u32,
        width_mm: f64,
        height_mm: f64,
    ) -> Result<Self, PadError> {
        if width_px == 0 || height_px == 0 {
            return Err(PadError::InvalidDimension(format!(
                "pixel size must be positive, got {width_px} x {height_px} px"
            )));
        }
        if !width_mm.is_finite() || width_mm <= 0.0 || !height_mm.is_finite() || height_mm <= 0.0 {
            return Err(PadError::InvalidDimension(format!(
                "physical size must be positive, got {width_mm} x {height_mm} mm"
            )));
        }

        Ok(Self {
            width_px,
            height_px,
            width_mm,
            height_mm,
        })
    }

    // Pixels per millimeter along each axis.
    pub fn ppmm_x(&self) -> f64 {
        self.width_px as f64 / self.width_mm
    }

    pub fn ppmm_y(&self) -> f64 {
        self.height_px as f64 / self.height_mm
    }
}

// Physical size of the sheet a picture was exported from. Pixel counts come
// from the decoded file, so this only carries millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PaperSize {
    // Drawings are exported as landscape A4 sheets.
    pub const A4_LANDSCAPE: PaperSize = PaperSize {
        width_mm: 297.0,
        height_mm: 210.0,
    };
}

pub struct PhysicalPicture {
    pub dims: PhysicalDimensions,
    pub pixels: RgbaImage,
}

impl PhysicalPicture {
    pub fn open(path: &Path, paper: PaperSize) -> Result<Self, PadError> {
        let decoded = image::open(path).map_err(|source| PadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_image(decoded.to_rgba8(), paper)
    }

    // The decoded buffer dictates the pixel size; the paper dictates the
    // physical size.
    pub fn from_image(pixels: RgbaImage, paper: PaperSize) -> Result<Self, PadError> {
        let dims = PhysicalDimensions::new(
            pixels.width(),
            pixels.height(),
            paper.width_mm,
            paper.height_mm,
        )?;

        Ok(Self { dims, pixels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppmm_is_the_exact_pixel_to_mm_ratio() {
        let dims = PhysicalDimensions::new(1240, 877, 297.0, 210.0).unwrap();
        assert_eq!(dims.ppmm_x(), 1240.0 / 297.0);
        assert_eq!(dims.ppmm_y(), 877.0 / 210.0);
    }

    #[test]
    fn zero_pixel_counts_are_rejected() {
        assert!(matches!(
            PhysicalDimensions::new(0, 768, 412.0, 233.0),
            Err(PadError::InvalidDimension(_))
        ));
        assert!(matches!(
            PhysicalDimensions::new(1360, 0, 412.0, 233.0),
            Err(PadError::InvalidDimension(_))
        ));
    }

    #[test]
    fn non_positive_physical_sizes_are_rejected() {
        assert!(matches!(
            PhysicalDimensions::new(1360, 768, 0.0, 233.0),
            Err(PadError::InvalidDimension(_))
        ));
        assert!(matches!(
            PhysicalDimensions::new(1360, 768, 412.0, -1.0),
            Err(PadError::InvalidDimension(_))
        ));
        assert!(matches!(
            PhysicalDimensions::new(1360, 768, f64::NAN, 233.0),
            Err(PadError::InvalidDimension(_))
        ));
    }

    #[test]
    fn from_image_takes_pixel_size_from_the_buffer() {
        let picture =
            PhysicalPicture::from_image(RgbaImage::new(320, 200), PaperSize::A4_LANDSCAPE).unwrap();

        assert_eq!(picture.dims.width_px, 320);
        assert_eq!(picture.dims.height_px, 200);
        assert_eq!(picture.dims.width_mm, 297.0);
        assert_eq!(picture.dims.height_mm, 210.0);
    }

    #[test]
    fn open_fails_on_a_missing_file() {
        let result = PhysicalPicture::open(Path::new("/no/such/file.png"), PaperSize::A4_LANDSCAPE);
        assert!(matches!(result, Err(PadError::Decode { .. })));
    }
}
