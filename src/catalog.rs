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

use crate::gaussian::{gaussian_kernel_1d, sigma_size};
use crate::{FilterError, Kernel, KernelShape};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Named masks of the catalog
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FilterId {
    PointDetection,
    HorizontalLine,
    VerticalLine,
    DiagonalLine45,
    DiagonalLineMinus45,
    PrewittVertical,
    PrewittHorizontal,
    PrewittDiagonal45,
    PrewittDiagonalMinus45,
    SobelVertical,
    SobelHorizontal,
    SobelDiagonal45,
    SobelDiagonalMinus45,
    Roberts,
    SecondDerivative,
    Laplacian,
    LaplacianOfGaussian,
}

/// Either a catalog mask or the kernel currently defined by the user
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FilterSelection {
    Named(FilterId),
    UserDefined,
}

impl From<FilterId> for FilterSelection {
    fn from(value: FilterId) -> Self {
        FilterSelection::Named(value)
    }
}

type Mask3 = [[i8; 3]; 3];

const POINT_DETECTION: Mask3 = [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]];
const HORIZONTAL_LINE: Mask3 = [[-1, -1, -1], [2, 2, 2], [-1, -1, -1]];
const VERTICAL_LINE: Mask3 = [[-1, 2, -1], [-1, 2, -1], [-1, 2, -1]];
const DIAGONAL_LINE_45: Mask3 = [[-1, -1, 2], [-1, 2, -1], [2, -1, -1]];
const DIAGONAL_LINE_MINUS_45: Mask3 = [[2, -1, -1], [-1, 2, -1], [-1, -1, 2]];
const PREWITT_VERTICAL: Mask3 = [[-1, 0, 1], [-1, 0, 1], [-1, 0, 1]];
const PREWITT_HORIZONTAL: Mask3 = [[-1, -1, -1], [0, 0, 0], [1, 1, 1]];
const PREWITT_DIAGONAL_45: Mask3 = [[0, -1, -1], [1, 0, -1], [1, 1, 0]];
const PREWITT_DIAGONAL_MINUS_45: Mask3 = [[-1, -1, 0], [-1, 0, 1], [0, 1, 1]];
const SOBEL_VERTICAL: Mask3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_HORIZONTAL: Mask3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
const SOBEL_DIAGONAL_45: Mask3 = [[0, 1, 2], [-1, 0, 1], [-2, -1, 0]];
const SOBEL_DIAGONAL_MINUS_45: Mask3 = [[-2, -1, 0], [-1, 0, 1], [0, 1, 2]];
const ROBERTS: [[i8; 2]; 2] = [[1, 0], [0, -1]];
const SECOND_DERIVATIVE: Mask3 = [[1, -2, 1], [-2, 4, -2], [1, -2, 1]];
const LAPLACIAN: Mask3 = [[0, -1, 0], [-1, 4, -1], [0, -1, 0]];

/// Side of the Laplacian of Gaussian mask
const LOG_SIZE: usize = 5;

impl FilterId {
    /// Every catalog entry in presentation order
    pub const ALL: [FilterId; 17] = [
        FilterId::PointDetection,
        FilterId::HorizontalLine,
        FilterId::VerticalLine,
        FilterId::DiagonalLine45,
        FilterId::DiagonalLineMinus45,
        FilterId::PrewittVertical,
        FilterId::PrewittHorizontal,
        FilterId::PrewittDiagonal45,
        FilterId::PrewittDiagonalMinus45,
        FilterId::SobelVertical,
        FilterId::SobelHorizontal,
        FilterId::SobelDiagonal45,
        FilterId::SobelDiagonalMinus45,
        FilterId::Roberts,
        FilterId::SecondDerivative,
        FilterId::Laplacian,
        FilterId::LaplacianOfGaussian,
    ];

    /// Stable snake_case identifier
    pub fn name(&self) -> &'static str {
        match self {
            FilterId::PointDetection => "point_detection",
            FilterId::HorizontalLine => "horizontal_line",
            FilterId::VerticalLine => "vertical_line",
            FilterId::DiagonalLine45 => "diagonal_line_45",
            FilterId::DiagonalLineMinus45 => "diagonal_line_minus_45",
            FilterId::PrewittVertical => "prewitt_vertical",
            FilterId::PrewittHorizontal => "prewitt_horizontal",
            FilterId::PrewittDiagonal45 => "prewitt_diagonal_45",
            FilterId::PrewittDiagonalMinus45 => "prewitt_diagonal_minus_45",
            FilterId::SobelVertical => "sobel_vertical",
            FilterId::SobelHorizontal => "sobel_horizontal",
            FilterId::SobelDiagonal45 => "sobel_diagonal_45",
            FilterId::SobelDiagonalMinus45 => "sobel_diagonal_minus_45",
            FilterId::Roberts => "roberts",
            FilterId::SecondDerivative => "second_derivative",
            FilterId::Laplacian => "laplacian",
            FilterId::LaplacianOfGaussian => "laplacian_of_gaussian",
        }
    }

    /// Human readable title
    pub fn title(&self) -> &'static str {
        match self {
            FilterId::PointDetection => "Point Detection",
            FilterId::HorizontalLine => "Horizontal Line Detection",
            FilterId::VerticalLine => "Vertical Line Detection",
            FilterId::DiagonalLine45 => "Diagonal Line Detection (+45 degrees)",
            FilterId::DiagonalLineMinus45 => "Diagonal Line Detection (-45 degrees)",
            FilterId::PrewittVertical => "Prewitt Vertical",
            FilterId::PrewittHorizontal => "Prewitt Horizontal",
            FilterId::PrewittDiagonal45 => "Prewitt Diagonal (+45 degrees)",
            FilterId::PrewittDiagonalMinus45 => "Prewitt Diagonal (-45 degrees)",
            FilterId::SobelVertical => "Sobel Vertical",
            FilterId::SobelHorizontal => "Sobel Horizontal",
            FilterId::SobelDiagonal45 => "Sobel Diagonal (+45 degrees)",
            FilterId::SobelDiagonalMinus45 => "Sobel Diagonal (-45 degrees)",
            FilterId::Roberts => "Roberts Filter",
            FilterId::SecondDerivative => "2nd Derivative Filter",
            FilterId::Laplacian => "Laplacian Filter",
            FilterId::LaplacianOfGaussian => "Laplacian of Gaussian Filter",
        }
    }
}

impl Display for FilterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterId {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterId::ALL
            .iter()
            .find(|id| id.name() == s)
            .copied()
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// Returns the mask registered for `id`
pub fn get_kernel(id: FilterId) -> Kernel {
    match id {
        FilterId::PointDetection => Kernel::from_table(&POINT_DETECTION),
        FilterId::HorizontalLine => Kernel::from_table(&HORIZONTAL_LINE),
        FilterId::VerticalLine => Kernel::from_table(&VERTICAL_LINE),
        FilterId::DiagonalLine45 => Kernel::from_table(&DIAGONAL_LINE_45),
        FilterId::DiagonalLineMinus45 => Kernel::from_table(&DIAGONAL_LINE_MINUS_45),
        FilterId::PrewittVertical => Kernel::from_table(&PREWITT_VERTICAL),
        FilterId::PrewittHorizontal => Kernel::from_table(&PREWITT_HORIZONTAL),
        FilterId::PrewittDiagonal45 => Kernel::from_table(&PREWITT_DIAGONAL_45),
        FilterId::PrewittDiagonalMinus45 => Kernel::from_table(&PREWITT_DIAGONAL_MINUS_45),
        FilterId::SobelVertical => Kernel::from_table(&SOBEL_VERTICAL),
        FilterId::SobelHorizontal => Kernel::from_table(&SOBEL_HORIZONTAL),
        FilterId::SobelDiagonal45 => Kernel::from_table(&SOBEL_DIAGONAL_45),
        FilterId::SobelDiagonalMinus45 => Kernel::from_table(&SOBEL_DIAGONAL_MINUS_45),
        FilterId::Roberts => Kernel::from_table(&ROBERTS),
        FilterId::SecondDerivative => Kernel::from_table(&SECOND_DERIVATIVE),
        FilterId::Laplacian => Kernel::from_table(&LAPLACIAN),
        FilterId::LaplacianOfGaussian => build_gaussian_laplacian(),
    }
}

/// Looks up a mask by its snake_case identifier
pub fn get_kernel_by_name(name: &str) -> Result<Kernel, FilterError> {
    name.parse::<FilterId>().map(get_kernel)
}

/// Builds the 5x5 Laplacian of Gaussian mask.
///
/// The outer product of a normalized 5 tap gaussian (sigma derived from the size)
/// is negated, then the center is overwritten with the literal `1 + 4`,
/// regardless of the gaussian value computed there.
pub fn build_gaussian_laplacian() -> Kernel {
    let sigma = sigma_size(LOG_SIZE as f64);
    let gaussian = gaussian_kernel_1d(LOG_SIZE, sigma);

    let weights = gaussian
        .iter()
        .flat_map(|&gy| gaussian.iter().map(move |&gx| -(gy * gx) as f32))
        .collect::<Vec<f32>>();

    let mut kernel = Kernel::from_parts(weights, KernelShape::new(LOG_SIZE, LOG_SIZE));
    let (anchor_y, anchor_x) = kernel.shape().anchor();
    kernel.set(anchor_y, anchor_x, 1. + 4.);
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_names_round_trip() {
        for id in FilterId::ALL {
            assert_eq!(id.name().parse::<FilterId>(), Ok(id));
        }
        assert_eq!(FilterId::ALL.len(), 17);
    }

    #[test]
    fn test_unknown_filter() {
        assert_eq!(
            "canny".parse::<FilterId>(),
            Err(FilterError::UnknownFilter("canny".to_string()))
        );
        assert!(get_kernel_by_name("Sobel_Vertical").is_err());
    }

    #[test]
    fn test_roberts_is_exact() {
        let kernel = get_kernel(FilterId::Roberts);
        assert_eq!(kernel.shape(), KernelShape::new(2, 2));
        assert_eq!(kernel.weights(), &[1., 0., 0., -1.]);
    }

    #[test]
    fn test_fixed_masks() {
        let sobel = get_kernel_by_name("sobel_diagonal_45").unwrap();
        assert_eq!(sobel.row(0), &[0., 1., 2.]);
        assert_eq!(sobel.row(1), &[-1., 0., 1.]);
        assert_eq!(sobel.row(2), &[-2., -1., 0.]);

        let vertical = get_kernel(FilterId::VerticalLine);
        for row in vertical.rows() {
            assert_eq!(row, &[-1., 2., -1.]);
        }

        let point = get_kernel(FilterId::PointDetection);
        assert_eq!(point.get(1, 1), 9.);
        assert_eq!(point.sum(), 1.);
    }

    #[test]
    fn test_gradient_masks_sum_to_zero() {
        for id in FilterId::ALL {
            let kernel = get_kernel(id);
            match id {
                FilterId::PointDetection | FilterId::LaplacianOfGaussian => {}
                _ => assert_eq!(kernel.sum(), 0., "{id} must sum to zero"),
            }
        }
    }

    #[test]
    fn test_gaussian_laplacian_center() {
        let kernel = build_gaussian_laplacian();
        assert_eq!(kernel.shape(), KernelShape::new(5, 5));
        assert_eq!(kernel.get(2, 2), 5.);

        let gaussian = gaussian_kernel_1d(5, 1.1);
        for y in 0..5 {
            for x in 0..5 {
                if y == 2 && x == 2 {
                    continue;
                }
                let expected = -(gaussian[y] * gaussian[x]) as f32;
                assert_relative_eq!(kernel.get(y, x), expected, epsilon = 1e-7);
                assert!(kernel.get(y, x) < 0.);
            }
        }
    }

    #[test]
    fn test_gaussian_laplacian_is_symmetric() {
        let kernel = build_gaussian_laplacian();
        for y in 0..5 {
            for x in 0..5 {
                assert_relative_eq!(kernel.get(y, x), kernel.get(x, y), epsilon = 1e-7);
                assert_relative_eq!(kernel.get(y, x), kernel.get(4 - y, 4 - x), epsilon = 1e-7);
            }
        }
    }
}
