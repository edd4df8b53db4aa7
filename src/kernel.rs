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

use crate::{FilterError, MismatchedSize};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Declares kernel dimensions
pub struct KernelShape {
    pub width: usize,
    pub height: usize,
}

impl KernelShape {
    pub fn new(width: usize, height: usize) -> KernelShape {
        KernelShape { width, height }
    }

    /// Cell aligned with the output pixel, `(row, column)`
    #[inline]
    pub fn anchor(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }
}

/// Row-major grid of correlation weights
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Vec<f32>,
    shape: KernelShape,
}

impl Kernel {
    /// Creates a kernel from row-major `weights`.
    ///
    /// Fails with [FilterError::DimensionMismatch] on an empty shape and with
    /// [FilterError::KernelSizeMismatch] if `weights` does not cover the shape exactly.
    pub fn new(weights: Vec<f32>, shape: KernelShape) -> Result<Kernel, FilterError> {
        if shape.width == 0 || shape.height == 0 {
            return Err(FilterError::DimensionMismatch);
        }
        if shape.width * shape.height != weights.len() {
            return Err(FilterError::KernelSizeMismatch(MismatchedSize {
                expected: shape.width * shape.height,
                received: weights.len(),
            }));
        }
        Ok(Kernel { weights, shape })
    }

    /// Caller guarantees `weights.len() == shape.width * shape.height` and a non-empty shape
    pub(crate) fn from_parts(weights: Vec<f32>, shape: KernelShape) -> Kernel {
        debug_assert_eq!(weights.len(), shape.width * shape.height);
        Kernel { weights, shape }
    }

    pub(crate) fn from_table<const H: usize, const W: usize>(table: &[[i8; W]; H]) -> Kernel {
        Kernel {
            weights: table
                .iter()
                .flat_map(|row| row.iter().map(|&x| x as f32))
                .collect(),
            shape: KernelShape::new(W, H),
        }
    }

    /// Reshapes `size * size` values row-major into a square kernel
    ///
    /// # Arguments
    ///
    /// * `size`: Side of the kernel, must be positive.
    /// * `values`: Exactly `size * size` weights, first row first.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgemask::Kernel;
    /// let kernel = Kernel::build_from_values(2, &[1., 2., 3., 4.]).unwrap();
    /// assert_eq!(kernel.row(1), &[3., 4.]);
    /// ```
    pub fn build_from_values(size: i64, values: &[f32]) -> Result<Kernel, FilterError> {
        if size <= 0 {
            return Err(FilterError::InvalidSize(size));
        }
        let side = size as usize;
        let expected = side
            .checked_mul(side)
            .ok_or(FilterError::InvalidSize(size))?;
        if values.len() != expected {
            return Err(FilterError::Shape(MismatchedSize {
                expected,
                received: values.len(),
            }));
        }
        Kernel::new(values.to_vec(), KernelShape::new(side, side))
    }

    /// Parses whitespace separated numbers and reshapes them like [Kernel::build_from_values]
    pub fn parse(size: i64, text: &str) -> Result<Kernel, FilterError> {
        if size <= 0 {
            return Err(FilterError::InvalidSize(size));
        }
        let values = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f32>()
                    .map_err(|_| FilterError::InvalidValue(token.to_string()))
            })
            .collect::<Result<Vec<f32>, FilterError>>()?;
        Kernel::build_from_values(size, &values)
    }

    #[inline]
    pub fn shape(&self) -> KernelShape {
        self.shape
    }

    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.weights[y * self.shape.width..(y + 1) * self.shape.width]
    }

    #[inline]
    pub fn get(&self, y: usize, x: usize) -> f32 {
        self.weights[y * self.shape.width + x]
    }

    #[inline]
    pub(crate) fn set(&mut self, y: usize, x: usize, value: f32) {
        self.weights[y * self.shape.width + x] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.weights.chunks_exact(self.shape.width)
    }

    /// Sum of all weights, the gain applied to a flat region
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

impl Display for Kernel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(", ")?;
                }
                f.write_fmt(format_args!("{value}"))?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_values_row_major() {
        let values = [1., 2., 3., 4., 5., 6., 7., 8., 9.];
        let kernel = Kernel::build_from_values(3, &values).unwrap();
        assert_eq!(kernel.row(0), &[1., 2., 3.]);
        assert_eq!(kernel.row(1), &[4., 5., 6.]);
        assert_eq!(kernel.row(2), &[7., 8., 9.]);
        assert_eq!(kernel.shape().anchor(), (1, 1));
    }

    #[test]
    fn test_build_from_values_shape_error() {
        assert_eq!(
            Kernel::build_from_values(2, &[1., 2., 3.]),
            Err(FilterError::Shape(MismatchedSize {
                expected: 4,
                received: 3,
            }))
        );
    }

    #[test]
    fn test_build_from_values_invalid_size() {
        assert_eq!(
            Kernel::build_from_values(0, &[]),
            Err(FilterError::InvalidSize(0))
        );
        assert_eq!(
            Kernel::build_from_values(-3, &[1.]),
            Err(FilterError::InvalidSize(-3))
        );
    }

    #[test]
    fn test_new_rejects_degenerate_shape() {
        assert_eq!(
            Kernel::new(vec![], KernelShape::new(0, 3)),
            Err(FilterError::DimensionMismatch)
        );
        assert!(matches!(
            Kernel::new(vec![1., 2.], KernelShape::new(3, 1)),
            Err(FilterError::KernelSizeMismatch(_))
        ));
    }

    #[test]
    fn test_parse_user_input() {
        let kernel = Kernel::parse(2, " 1 -2.5\n3  0.25 ").unwrap();
        assert_eq!(kernel.weights(), &[1., -2.5, 3., 0.25]);
        assert_eq!(
            Kernel::parse(2, "1 2 x 4"),
            Err(FilterError::InvalidValue("x".to_string()))
        );
        assert!(matches!(
            Kernel::parse(2, "1 2 3 4 5"),
            Err(FilterError::Shape(_))
        ));
    }

    #[test]
    fn test_anchor_of_even_kernel() {
        let kernel = Kernel::from_table(&[[1, 0], [0, -1]]);
        assert_eq!(kernel.shape().anchor(), (1, 1));
        assert_eq!(kernel.sum(), 0.);
        assert_eq!(kernel.to_string(), "[1, 0]\n[0, -1]");
    }
}
