use std::path::Path;

use image::ImageReader;
use photo_sorter_application::{ApplicationError, ImageDecoder};
use photo_sorter_domain::{detect_photo_kind, DecodedPhoto, PhotoKind};

/// Decodes PNG/JPEG sources with the `image` crate and scales them down to fit
/// the preview stage. The reader is dropped before returning, so the source
/// file can be renamed right after.
#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode_for_preview(
        &self,
        path: &Path,
        max_width: u32,
        max_height: u32,
    ) -> Result<DecodedPhoto, ApplicationError> {
        let kind = detect_photo_kind(path);
        if kind == PhotoKind::Unsupported {
            return Err(ApplicationError::Decode(format!(
                "unsupported image format: {}",
                path.display()
            )));
        }
        if max_width == 0 || max_height == 0 {
            return Err(ApplicationError::InvalidInput(
                "preview bounds must be non-zero".to_string(),
            ));
        }

        let image = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?
            .decode()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let source = image.to_rgb8();
        let src_width = source.width();
        let src_height = source.height();
        if src_width == 0 || src_height == 0 {
            return Err(ApplicationError::Decode(format!(
                "empty image dimensions for {}",
                path.display()
            )));
        }

        let (width, height) = fit_within(src_width, src_height, max_width, max_height);
        let mut pixels = vec![0_u32; width as usize * height as usize];
        for y in 0..height {
            let src_y = (u64::from(y) * u64::from(src_height) / u64::from(height)) as u32;
            for x in 0..width {
                let src_x = (u64::from(x) * u64::from(src_width) / u64::from(width)) as u32;
                let [red, green, blue] = source.get_pixel(src_x, src_y).0;
                pixels[(y * width + x) as usize] = pack_rgb(red, green, blue);
            }
        }

        Ok(DecodedPhoto {
            width,
            height,
            kind,
            pixels,
        })
    }
}

/// Never upscales; keeps aspect ratio and at least one pixel per side.
fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);
    let fitted_width = ((width as f32 * scale).round() as u32).clamp(1, max_width);
    let fitted_height = ((height as f32 * scale).round() as u32).clamp(1, max_height);
    (fitted_width, fitted_height)
}

fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | (blue as u32)
}
