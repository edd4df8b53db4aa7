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

use crate::filter2d::arena::{make_arena, ArenaPads};
use crate::filter2d::convolve_op::convolve_segment_2d;
use crate::filter2d::scan_se_2d::scan_se_2d;
use crate::{
    EdgeMode, FilterError, GrayImage, GrayImageMut, Kernel, KernelShape, MismatchedSize,
    ThreadingPolicy,
};
use num_traits::AsPrimitive;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::prelude::ParallelSliceMut;

/// This performs direct 2D correlation on image.
///
/// Output pixel `(y, x)` is the sum of `kernel[ky][kx] * image[y + ky - ay][x + kx - ax]`
/// where `(ay, ax)` is the kernel anchor, rounded and saturated into `0..=255`.
///
/// # Arguments
///
/// * `src`: Source image.
/// * `dst`: Destination image, owned storage is resized to the source.
/// * `kernel`: Kernel, see [Kernel] for more info.
/// * `border_mode`: Border handling mode see [EdgeMode] for more info.
/// * `threading_policy`: See [ThreadingPolicy] for more info.
///
/// # Examples
///
/// ```
/// use edgemask::{filter_2d, get_kernel, EdgeMode, FilterId, GrayImage, GrayImageMut, ThreadingPolicy};
/// let src = vec![128u8; 16 * 16];
/// let image = GrayImage::borrow(&src, 16, 16);
/// let mut dst = GrayImageMut::default();
/// filter_2d(
///     &image,
///     &mut dst,
///     &get_kernel(FilterId::Roberts),
///     EdgeMode::Clamp,
///     ThreadingPolicy::Single,
/// )
/// .unwrap();
/// assert!(dst.data.borrow().iter().all(|&x| x == 0));
/// ```
pub fn filter_2d(
    src: &GrayImage,
    dst: &mut GrayImageMut,
    kernel: &Kernel,
    border_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError> {
    filter_2d_arbitrary(
        src,
        dst,
        kernel.weights(),
        kernel.shape(),
        border_mode,
        threading_policy,
    )
}

/// This performs direct 2D correlation on image with a raw row-major kernel.
///
/// # Arguments
///
/// * `src`: Source image.
/// * `dst`: Destination image.
/// * `kernel`: Row-major weights, integral kernels are accepted as is.
/// * `kernel_shape`: Kernel size, see [KernelShape] for more info.
/// * `border_mode`: Border handling mode see [EdgeMode] for more info.
/// * `threading_policy`: See [ThreadingPolicy] for more info.
///
pub fn filter_2d_arbitrary<F>(
    src: &GrayImage,
    dst: &mut GrayImageMut,
    kernel: &[F],
    kernel_shape: KernelShape,
    border_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    F: Copy + PartialEq + AsPrimitive<f32>,
    i32: AsPrimitive<F>,
{
    let kernel_width = kernel_shape.width;
    let kernel_height = kernel_shape.height;
    if kernel_width == 0 || kernel_height == 0 {
        return Err(FilterError::DimensionMismatch);
    }
    if kernel_height * kernel_width != kernel.len() {
        return Err(FilterError::KernelSizeMismatch(MismatchedSize {
            expected: kernel_height * kernel_width,
            received: kernel.len(),
        }));
    }
    src.check_layout()?;
    dst.check_layout(Some(src))?;
    src.size_matches_mut(dst)?;

    let image_size = src.size();
    let dst_stride = dst.row_stride() as usize;

    let analyzed_se = scan_se_2d(kernel, kernel_shape);

    if analyzed_se.is_empty() {
        for row in dst
            .data
            .borrow_mut()
            .chunks_mut(dst_stride)
            .take(image_size.height)
        {
            row[..image_size.width].fill(0);
        }
        return Ok(());
    }

    let (arena_source, arena) = make_arena(
        src,
        ArenaPads::from_kernel_shape(kernel_shape),
        border_mode,
    )?;

    let arena_source_slice = arena_source.as_slice();
    let kernel_slice = analyzed_se.as_slice();

    let thread_count = threading_policy.thread_count(image_size.width, image_size.height);
    let pool = if thread_count == 1 {
        None
    } else {
        rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .ok()
    };

    let dst_data = dst.data.borrow_mut();
    let dst_data = &mut dst_data[..dst_stride * (image_size.height - 1) + image_size.width];

    if let Some(pool) = &pool {
        pool.install(|| {
            dst_data
                .par_chunks_mut(dst_stride)
                .enumerate()
                .for_each(|(y, row)| {
                    convolve_segment_2d(
                        arena,
                        arena_source_slice,
                        row,
                        image_size,
                        kernel_slice,
                        y,
                    );
                });
        });
    } else {
        for (y, row) in dst_data.chunks_mut(dst_stride).enumerate() {
            convolve_segment_2d(arena, arena_source_slice, row, image_size, kernel_slice, y);
        }
    }
    Ok(())
}

/// Applies `kernel` with replicated borders on the current thread and returns a new image
pub fn apply(image: &GrayImage, kernel: &Kernel) -> Result<GrayImageMut<'static>, FilterError> {
    let mut dst = GrayImageMut::default();
    filter_2d(image, &mut dst, kernel, EdgeMode::Clamp, ThreadingPolicy::Single)?;
    Ok(dst)
}
