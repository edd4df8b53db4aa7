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

use crate::filter2d::arena::Arena;
use crate::filter2d::scan_point_2d::ScanPoint2d;
use crate::to_storage::ToStorage;
use crate::ImageSize;

/// `acc + a * b`, fused only where the target has hardware FMA
#[cfg(any(
    target_feature = "fma",
    all(target_arch = "aarch64", target_feature = "neon")
))]
#[inline(always)]
pub(crate) fn mlaf(acc: f32, a: f32, b: f32) -> f32 {
    f32::mul_add(a, b, acc)
}

#[cfg(not(any(
    target_feature = "fma",
    all(target_arch = "aarch64", target_feature = "neon")
)))]
#[inline(always)]
pub(crate) fn mlaf(acc: f32, a: f32, b: f32) -> f32 {
    acc + a * b
}

/// Correlates one output row against the padded arena.
///
/// Sums are accumulated in `f32`, then rounded and saturated into `u8`.
pub(crate) fn convolve_segment_2d(
    arena: Arena,
    arena_source: &[u8],
    dst: &mut [u8],
    image_size: ImageSize,
    prepared_kernel: &[ScanPoint2d<f32>],
    y: usize,
) {
    let dx = arena.pad_left as i64;
    let dy = arena.pad_top as i64;

    let offsets = prepared_kernel
        .iter()
        .map(|&point| {
            let start = (point.y + dy + y as i64) as usize * arena.width + (point.x + dx) as usize;
            &arena_source[start..start + image_size.width]
        })
        .collect::<Vec<_>>();

    for (x, dst) in dst.iter_mut().take(image_size.width).enumerate() {
        let mut sum = 0f32;
        for (point, src) in prepared_kernel.iter().zip(offsets.iter()) {
            sum = mlaf(sum, src[x] as f32, point.weight);
        }
        *dst = sum.to_();
    }
}
