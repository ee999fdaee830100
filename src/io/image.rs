//! Depth map decoding and grayscale PNG export

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};
use ndarray::Array2;

use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{Result, StereogramError, invalid_shape};
use crate::math::normalization::stretch_to_depth;
use crate::spatial::{DepthField, Stereogram};

/// How decoded pixels become proximities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthEncoding {
    /// Collapse to 8-bit luma and use the values as-is
    #[default]
    Luma8,
    /// Collapse to full-precision luma and min/max stretch to `[0, 255]`
    Stretch,
}

/// Load a depth map from any raster format the `image` crate can decode
///
/// Color inputs are collapsed to a single luma channel.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Either dimension is zero or exceeds [`MAX_IMAGE_DIMENSION`]
pub fn load_depth_map<P: AsRef<Path>>(path: P, encoding: DepthEncoding) -> Result<DepthField> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| StereogramError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    depth_from_image(&img, encoding)
}

/// Convert an already decoded image into a depth field
///
/// # Errors
///
/// Returns an error if either dimension is zero or exceeds [`MAX_IMAGE_DIMENSION`]
pub fn depth_from_image(img: &DynamicImage, encoding: DepthEncoding) -> Result<DepthField> {
    let (rows, cols) = (img.height() as usize, img.width() as usize);
    if rows > MAX_IMAGE_DIMENSION || cols > MAX_IMAGE_DIMENSION {
        return Err(invalid_shape(
            &[rows, cols],
            &format!("dimensions must not exceed {MAX_IMAGE_DIMENSION}"),
        ));
    }

    match encoding {
        DepthEncoding::Luma8 => depth_from_gray(&img.to_luma8()),
        DepthEncoding::Stretch => {
            let luma = img.to_luma32f();
            let samples = Array2::from_shape_vec((rows, cols), luma.into_raw())
                .map_err(|e| invalid_shape(&[rows, cols], &e))?;
            stretch_to_depth(&samples)
        }
    }
}

/// Use 8-bit grayscale pixels directly as proximities
///
/// # Errors
///
/// Returns an error if either dimension is zero
pub fn depth_from_gray(img: &GrayImage) -> Result<DepthField> {
    DepthField::from_raw(
        img.height() as usize,
        img.width() as usize,
        img.as_raw().clone(),
    )
}

/// Write a stereogram as an 8-bit grayscale PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_stereogram_png<P: AsRef<Path>>(
    stereogram: &Stereogram,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StereogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    stereogram
        .to_image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| StereogramError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
