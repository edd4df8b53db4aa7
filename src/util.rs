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

use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    /// Filter identifier is not part of the catalog
    UnknownFilter(String),
    /// Value count does not match `size * size`
    Shape(MismatchedSize),
    /// Requested kernel size is zero or negative
    InvalidSize(i64),
    /// Kernel has zero rows or zero columns
    DimensionMismatch,
    NoImageLoaded,
    NoKernelDefined,
    /// Token of user input is not a number
    InvalidValue(String),
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
    KernelSizeMismatch(MismatchedSize),
    ImagesMustMatch,
}

impl Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FilterError::UnknownFilter(name) => {
                f.write_fmt(format_args!("Unknown filter: '{name}'"))
            }
            FilterError::Shape(size) => f.write_fmt(format_args!(
                "Kernel values count mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            FilterError::InvalidSize(size) => f.write_fmt(format_args!(
                "Kernel size must be positive, but received {size}"
            )),
            FilterError::DimensionMismatch => {
                f.write_str("Kernel must have at least one row and one column")
            }
            FilterError::NoImageLoaded => f.write_str("No image is loaded"),
            FilterError::NoKernelDefined => f.write_str("No user-defined kernel is set"),
            FilterError::InvalidValue(token) => {
                f.write_fmt(format_args!("Kernel value '{token}' is not a number"))
            }
            FilterError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            FilterError::MinimumStrideSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            )),
            FilterError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            FilterError::KernelSizeMismatch(size) => f.write_fmt(format_args!(
                "Kernel size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            FilterError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
        }
    }
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    stride: usize,
    width: usize,
    height: usize,
) -> Result<(), FilterError> {
    if width == 0 || height == 0 {
        return Err(FilterError::ZeroBaseSize);
    }
    if arr.len() < stride * (height - 1) + width {
        return Err(FilterError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * height,
            received: arr.len(),
        }));
    }
    if stride < width {
        return Err(FilterError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width,
            received: stride,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_slice_size() {
        let data = vec![0u8; 12];
        assert!(check_slice_size(&data, 4, 4, 3).is_ok());
        assert_eq!(
            check_slice_size(&data, 4, 0, 3),
            Err(FilterError::ZeroBaseSize)
        );
        assert_eq!(
            check_slice_size(&data, 4, 4, 4),
            Err(FilterError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12,
            }))
        );
        assert_eq!(
            check_slice_size(&data, 2, 4, 2),
            Err(FilterError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: 4,
                received: 2,
            }))
        );
    }

    #[test]
    fn test_display_shape() {
        let error = FilterError::Shape(MismatchedSize {
            expected: 4,
            received: 3,
        });
        assert_eq!(
            error.to_string(),
            "Kernel values count mismatch: expected=4, received=3"
        );
    }
}
