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

use crate::util::check_slice_size;
use crate::{FilterError, ImageSize};

#[derive(Debug)]
pub enum BufferStore<'a> {
    Borrowed(&'a mut [u8]),
    Owned(Vec<u8>),
}

impl BufferStore<'_> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn resize(&mut self, new_size: usize, value: u8) {
        match self {
            Self::Borrowed(_) => {}
            Self::Owned(vec) => vec.resize(new_size, value),
        }
    }
}

/// Immutable single channel 8-bit image
#[derive(Debug, Clone)]
pub struct GrayImage<'a> {
    pub data: std::borrow::Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    /// Bytes per row, 0 means `width`
    pub stride: u32,
}

/// Destination plane, owned storage grows to whatever the filter writes
#[derive(Debug)]
pub struct GrayImageMut<'a> {
    pub data: BufferStore<'a>,
    pub width: u32,
    pub height: u32,
    /// Bytes per row, 0 means `width`
    pub stride: u32,
}

impl Default for GrayImageMut<'_> {
    fn default() -> Self {
        GrayImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
            stride: 0,
        }
    }
}

impl<'a> GrayImage<'a> {
    /// Views a tightly packed buffer
    pub fn borrow(arr: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    /// Takes ownership of a tightly packed buffer
    pub fn from_vec(data: Vec<u8>, width: u32, height: u32) -> Result<GrayImage<'static>, FilterError> {
        let image = GrayImage {
            data: std::borrow::Cow::Owned(data),
            width,
            height,
            stride: width,
        };
        image.check_layout()?;
        Ok(image)
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), FilterError> {
        check_slice_size(
            self.data.as_ref(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
        )
    }

    /// Fails with [FilterError::ImagesMustMatch] unless both planes have the same dimensions
    #[inline]
    pub fn size_matches_mut(&self, other: &GrayImageMut<'_>) -> Result<(), FilterError> {
        if self.width == other.width && self.height == other.height {
            return Ok(());
        }
        Err(FilterError::ImagesMustMatch)
    }

    /// Reads pixel at `(x, y)`, the coordinates must be in bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.row_stride() as usize + x]
    }

    /// Copies visible pixels into a tightly packed vector
    pub fn to_packed_vec(&self) -> Vec<u8> {
        let width = self.width as usize;
        self.data
            .as_ref()
            .chunks(self.row_stride() as usize)
            .take(self.height as usize)
            .flat_map(|row| row[..width].iter().copied())
            .collect()
    }
}

impl<'a> GrayImageMut<'a> {
    /// Black `width` x `height` destination
    pub fn alloc(width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Owned(vec![0u8; width as usize * height as usize]),
            width,
            height,
            stride: width,
        }
    }

    /// Writes into a caller provided, tightly packed buffer
    pub fn borrow(arr: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    /// Validates a borrowed buffer, or resizes owned storage to `other` when given
    #[inline]
    pub fn check_layout(&mut self, other: Option<&GrayImage<'_>>) -> Result<(), FilterError> {
        if let Some(other) = other {
            if matches!(self.data, BufferStore::Owned(_)) {
                self.resize(other.width, other.height);
                return Ok(());
            }
        }
        check_slice_size(
            self.data.borrow(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
        )
    }

    /// Reads pixel at `(x, y)`, the coordinates must be in bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data.borrow()[y * self.row_stride() as usize + x]
    }

    /// Converts into an owned immutable image
    pub fn into_immutable(self) -> GrayImage<'static> {
        let stride = self.row_stride();
        let data = match self.data {
            BufferStore::Borrowed(p_ref) => p_ref.to_vec(),
            BufferStore::Owned(vec) => vec,
        };
        GrayImage {
            data: std::borrow::Cow::Owned(data),
            width: self.width,
            height: self.height,
            stride,
        }
    }

    #[inline]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.height = height;
        self.width = width;
        self.stride = width;
        self.data
            .resize(self.row_stride() as usize * self.height as usize, 0);
    }
}
