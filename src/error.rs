use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(
        "picture is physically larger than the panel: \
         panel [{panel_height_mm} x {panel_width_mm} mm], \
         picture [{picture_height_mm} x {picture_width_mm} mm]"
    )]
    OversizePhysical {
        panel_width_mm: f64,
        panel_height_mm: f64,
        picture_width_mm: f64,
        picture_height_mm: f64,
    },

    #[error("panel spans only {target_px} px at the picture's density, but the picture is {picture_px} px wide/tall on that axis")]
    PadUnderflow { target_px: i64, picture_px: u32 },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}
