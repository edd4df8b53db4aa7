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

#![no_main]

use arbitrary::Arbitrary;
use edgemask::{EdgeMode, GrayImage, GrayImageMut, Kernel, ThreadingPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u16,
    pub src_height: u16,
    pub edge_mode: u8,
    pub kernel_size: u8,
    pub weights: Vec<f32>,
    pub threading: bool,
}

fuzz_target!(|data: SrcImage| {
    if data.src_width > 250 || data.src_height > 250 {
        return;
    }
    if data.kernel_size == 0 || data.kernel_size > 15 {
        return;
    }
    let edge_mode = match data.edge_mode % 5 {
        0 => EdgeMode::Clamp,
        1 => EdgeMode::Wrap,
        2 => EdgeMode::Reflect,
        3 => EdgeMode::Reflect101,
        _ => EdgeMode::Constant(data.edge_mode),
    };
    let mp = if data.threading {
        ThreadingPolicy::Adaptive
    } else {
        ThreadingPolicy::Single
    };
    fuzz_8bit(
        data.src_width as usize,
        data.src_height as usize,
        data.kernel_size as usize,
        &data.weights,
        edge_mode,
        mp,
    );
});

fn fuzz_8bit(
    width: usize,
    height: usize,
    kernel_size: usize,
    weights: &[f32],
    edge_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) {
    if width == 0 || height == 0 {
        return;
    }
    let mut values = vec![0f32; kernel_size * kernel_size];
    for (dst, &src) in values.iter_mut().zip(weights.iter()) {
        *dst = if src.is_finite() { src } else { 0. };
    }
    let kernel = Kernel::build_from_values(kernel_size as i64, &values).unwrap();

    let src_data = (0..width * height)
        .map(|i| (i * 31 % 256) as u8)
        .collect::<Vec<u8>>();
    let src_image = GrayImage::borrow(&src_data, width as u32, height as u32);
    let mut dst_image = GrayImageMut::default();

    edgemask::filter_2d(
        &src_image,
        &mut dst_image,
        &kernel,
        edge_mode,
        threading_policy,
    )
    .unwrap();
    assert_eq!(dst_image.width as usize, width);
    assert_eq!(dst_image.height as usize, height);
}
