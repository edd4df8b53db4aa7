/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::{FilterError, GrayImage};
use image::error::{ParameterError, ParameterErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat, ImageResult};
use std::path::Path;

/// Working resolution images are scaled to before filtering in the interactive tool
pub const PREVIEW_SIZE: (u32, u32) = (400, 307);

/// Converts any decoded image into a single luma plane
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate.
/// * `resize`: Optional exact `(width, height)` to scale to with linear filtering.
///
pub fn gray_from_dynamic(
    image: DynamicImage,
    resize: Option<(u32, u32)>,
) -> Result<GrayImage<'static>, FilterError> {
    let image = match resize {
        Some((width, height)) if (width, height) != (image.width(), image.height()) => {
            image.resize_exact(width, height, FilterType::Triangle)
        }
        _ => image,
    };
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();
    GrayImage::from_vec(luma.into_raw(), width, height)
}

/// Wraps a filtered plane back into an image crate buffer
#[must_use]
pub fn gray_to_dynamic(image: &GrayImage) -> Option<DynamicImage> {
    let buffer = image::GrayImage::from_raw(image.width, image.height, image.to_packed_vec())?;
    Some(DynamicImage::ImageLuma8(buffer))
}

/// Encoder picked for `path`: the one its extension names when compiled in, PNG otherwise
pub fn output_format(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => format,
        _ => ImageFormat::Png,
    }
}

/// Encodes a plane to `path` with [output_format]
pub fn save_gray(image: &GrayImage, path: impl AsRef<Path>) -> ImageResult<()> {
    let path = path.as_ref();
    let format = output_format(path);
    log::debug!("Encoding {} as {format:?}", path.display());
    let dynamic = gray_to_dynamic(image).ok_or_else(|| {
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
    })?;
    dynamic.save_with_format(path, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageReader, Luma, Rgb, RgbImage};

    #[test]
    fn test_rgb_to_gray_plane() {
        let rgb = RgbImage::from_pixel(7, 3, Rgb([200, 200, 200]));
        let gray = gray_from_dynamic(DynamicImage::ImageRgb8(rgb), None).unwrap();
        assert_eq!((gray.width, gray.height), (7, 3));
        assert!(gray.data.iter().all(|&x| x == 200));
    }

    #[test]
    fn test_resize_to_preview() {
        let luma = image::GrayImage::from_pixel(64, 48, Luma([10]));
        let gray = gray_from_dynamic(DynamicImage::ImageLuma8(luma), Some(PREVIEW_SIZE)).unwrap();
        assert_eq!((gray.width, gray.height), PREVIEW_SIZE);
        assert_eq!(gray.data.len(), 400 * 307);
    }

    #[test]
    fn test_back_to_dynamic() {
        let data = [1u8, 2, 3, 9, 4, 5, 6, 9];
        let mut plane = GrayImage::borrow(&data, 3, 2);
        plane.stride = 4;
        let dynamic = gray_to_dynamic(&plane).unwrap();
        let luma = dynamic.as_luma8().unwrap();
        assert_eq!(luma.get_pixel(2, 1), &Luma([6]));
    }

    #[test]
    fn test_output_format_falls_back_to_png() {
        assert_eq!(output_format(Path::new("edges.jpg")), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("edges.png")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("edges.result")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("edges.bmp")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("edges")), ImageFormat::Png);
    }

    #[test]
    fn test_save_unknown_extension_as_png() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let data = [0u8, 64, 128, 255];
        let plane = GrayImage::borrow(&data, 2, 2);

        for name in ["out.result", "out.bmp", "out"] {
            let path = tmp_dir.path().join(name);
            save_gray(&plane, &path)?;
            let reader = ImageReader::open(&path)?.with_guessed_format()?;
            assert_eq!(reader.format(), Some(ImageFormat::Png));
            let decoded = reader.decode()?;
            assert_eq!(decoded.as_luma8().unwrap().as_raw(), &data.to_vec());
        }
        Ok(())
    }
}
