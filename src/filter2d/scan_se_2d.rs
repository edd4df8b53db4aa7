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

use crate::filter2d::scan_point_2d::ScanPoint2d;
use crate::KernelShape;
use num_traits::AsPrimitive;

/// Collects non-zero taps of a row-major kernel, offsets taken from the anchor
pub(crate) fn scan_se_2d<F>(
    structuring_element: &[F],
    structuring_element_size: KernelShape,
) -> Vec<ScanPoint2d<f32>>
where
    F: Copy + PartialEq + AsPrimitive<f32>,
    i32: AsPrimitive<F>,
{
    let mut left_front = vec![];

    let (vertical_anchor, horizontal_anchor) = structuring_element_size.anchor();
    let zero_f: F = 0i32.as_();

    structuring_element
        .chunks_exact(structuring_element_size.width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, &element) in row.iter().enumerate() {
                if element.ne(&zero_f) {
                    left_front.push(ScanPoint2d::new(
                        x as i64 - horizontal_anchor as i64,
                        y as i64 - vertical_anchor as i64,
                        element.as_(),
                    ));
                }
            }
        });

    left_front
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_skips_zero_taps() {
        let roberts: [i16; 4] = [1, 0, 0, -1];
        let scanned = scan_se_2d(&roberts, KernelShape::new(2, 2));
        assert_eq!(
            scanned,
            vec![
                ScanPoint2d::new(-1, -1, 1f32),
                ScanPoint2d::new(0, 0, -1f32),
            ]
        );
    }

    #[test]
    fn test_scan_offsets_rectangular() {
        let kernel = [1f32, 2., 3.];
        let scanned = scan_se_2d(&kernel, KernelShape::new(3, 1));
        let offsets = scanned.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();
        assert_eq!(offsets, vec![(-1, 0), (0, 0), (1, 0)]);
    }
}
