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

#![cfg_attr(docsrs, feature(doc_cfg))]
//! Point, line and edge detection masks for single channel 8-bit images.
//!
//! [get_kernel] resolves one of the catalog masks listed in [FilterId],
//! [Kernel::build_from_values] reshapes user supplied weights, and
//! [filter_2d] correlates any of them with a [GrayImage].

mod catalog;
mod edge_mode;
mod filter2d;
mod gaussian;
mod gray_image;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod image_io;
mod img_size;
mod kernel;
mod session;
mod threading_policy;
mod to_storage;
mod util;

pub use catalog::{
    build_gaussian_laplacian, get_kernel, get_kernel_by_name, FilterId, FilterSelection,
};
pub use edge_mode::EdgeMode;
pub use filter2d::{apply, filter_2d, filter_2d_arbitrary, make_arena, Arena, ArenaPads};
pub use gaussian::{gaussian_kernel_1d, sigma_size};
pub use gray_image::{BufferStore, GrayImage, GrayImageMut};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use image_io::{gray_from_dynamic, gray_to_dynamic, output_format, save_gray, PREVIEW_SIZE};
pub use img_size::ImageSize;
pub use kernel::{Kernel, KernelShape};
pub use session::FilterSession;
pub use threading_policy::ThreadingPolicy;
pub use to_storage::ToStorage;
pub use util::{FilterError, MismatchedSize};
