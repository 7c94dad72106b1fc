use std::path::Path;

use image::{GenericImage, ImageFormat, Rgba, RgbaImage};

use crate::error::PadError;
use crate::physical_image::{PhysicalDimensions, PhysicalPicture};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Pads the picture on the right and bottom with opaque white until it fills
// the panel's physical footprint at the picture's own pixel density. The
// picture is never resampled; its pixels land verbatim in the top-left
// corner of the returned buffer.
pub fn pad_to_panel(
    picture: &PhysicalPicture,
    panel: &PhysicalDimensions,
) -> Result<RgbaImage, PadError> {
    let dims = &picture.dims;

    // Physical fit check comes before any pixel math.
    if dims.height_mm > panel.height_mm || dims.width_mm > panel.width_mm {
        return Err(PadError::OversizePhysical {
            panel_width_mm: panel.width_mm,
            panel_height_mm: panel.height_mm,
            picture_width_mm: dims.width_mm,
            picture_height_mm: dims.height_mm,
        });
    }

    let target_width = panel_axis_px(panel.width_mm, dims.ppmm_x(), dims.width_px)?;
    let target_height = panel_axis_px(panel.height_mm, dims.ppmm_y(), dims.height_px)?;

    log::debug!(
        "panel at picture density: {}x{} px (pad {}x{})",
        target_width,
        target_height,
        target_width - dims.width_px,
        target_height - dims.height_px
    );

    let mut framebuffer = RgbaImage::from_pixel(target_width, target_height, WHITE);
    framebuffer
        .copy_from(&picture.pixels, 0, 0)
        .map_err(|e| PadError::Internal(format!("picture does not fit the padded buffer: {e}")))?;

    Ok(framebuffer)
}

// Panel extent in pixels along one axis, at the picture's density. Guaranteed
// to be at least the picture's own extent: floor() can land one pixel short
// when panel and picture share a physical size, which snaps to an exact fit;
// anything shorter cannot follow a passed fit check and is an error.
fn panel_axis_px(panel_mm: f64, ppmm: f64, picture_px: u32) -> Result<u32, PadError> {
    let target = (panel_mm * ppmm).floor() as i64;
    let shortfall = picture_px as i64 - target;

    if shortfall > 1 {
        return Err(PadError::PadUnderflow {
            target_px: target,
            picture_px,
        });
    }
    if shortfall >= 0 {
        return Ok(picture_px);
    }

    u32::try_from(target).map_err(|_| {
        PadError::InvalidDimension(format!("panel resolution {target} px does not fit in 32 bits"))
    })
}

pub fn write_framebuffer(framebuffer: &RgbaImage, path: &Path) -> Result<(), PadError> {
    framebuffer
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| PadError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
