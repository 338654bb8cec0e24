//! Image decoding for the print surface.
//!
//! Decoding is the only potentially slow step in assembly and the only one
//! that can fail on user data, so it is isolated here. Pixels come out
//! premultiplied and orientation-normalized: consumers never have to care
//! which way a phone was held when the photo was taken.

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::error::{FramecraftError, FramecraftResult};

/// A decoded, display-ready texture: premultiplied RGBA8, row-major,
/// tightly packed, orientation applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedTexture {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode raw image bytes into a [`PreparedTexture`].
///
/// Failure is expected to be non-fatal for callers: the 3D assembly falls
/// back to a flat color and the 2D preview simply omits the image content.
pub fn decode_texture(bytes: &[u8]) -> FramecraftResult<PreparedTexture> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FramecraftError::image_decode(e.to_string()))?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| FramecraftError::image_decode(e.to_string()))?;
    let orientation = decoder
        .orientation()
        .map_err(|e| FramecraftError::image_decode(e.to_string()))?;
    let mut img = DynamicImage::from_decoder(decoder)
        .map_err(|e| FramecraftError::image_decode(e.to_string()))?;
    img.apply_orientation(orientation);

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedTexture {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
