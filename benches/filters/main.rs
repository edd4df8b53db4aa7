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

use criterion::{criterion_group, criterion_main, Criterion};
use edgemask::{
    build_gaussian_laplacian, get_kernel, EdgeMode, FilterId, GrayImage, GrayImageMut,
    ThreadingPolicy,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (1920u32, 1080u32);
    let src_bytes = (0..width as usize * height as usize)
        .map(|i| ((i * 7 + i / width as usize * 13) % 256) as u8)
        .collect::<Vec<u8>>();
    let src_image = GrayImage::borrow(&src_bytes, width, height);

    let sobel = get_kernel(FilterId::SobelVertical);
    let log = build_gaussian_laplacian();

    c.bench_function("edgemask: Sobel 3x3", |b| {
        let mut dst = GrayImageMut::alloc(width, height);
        b.iter(|| {
            edgemask::filter_2d(
                &src_image,
                &mut dst,
                &sobel,
                EdgeMode::Clamp,
                ThreadingPolicy::Adaptive,
            )
            .unwrap();
        })
    });

    c.bench_function("edgemask: Sobel 3x3 Single Thread", |b| {
        let mut dst = GrayImageMut::alloc(width, height);
        b.iter(|| {
            edgemask::filter_2d(
                &src_image,
                &mut dst,
                &sobel,
                EdgeMode::Clamp,
                ThreadingPolicy::Single,
            )
            .unwrap();
        })
    });

    c.bench_function("edgemask: LoG 5x5", |b| {
        let mut dst = GrayImageMut::alloc(width, height);
        b.iter(|| {
            edgemask::filter_2d(
                &src_image,
                &mut dst,
                &log,
                EdgeMode::Reflect101,
                ThreadingPolicy::Adaptive,
            )
            .unwrap();
        })
    });

    c.bench_function("edgemask: LoG 5x5 Single Thread", |b| {
        let mut dst = GrayImageMut::alloc(width, height);
        b.iter(|| {
            edgemask::filter_2d(
                &src_image,
                &mut dst,
                &log,
                EdgeMode::Reflect101,
                ThreadingPolicy::Single,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
