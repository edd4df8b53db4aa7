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

use crate::edge_mode::resolve_index;
use crate::{EdgeMode, FilterError, GrayImage, ImageSize, KernelShape};

/// Geometry of a padded copy of an image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arena {
    pub width: usize,
    pub height: usize,
    pub pad_left: usize,
    pub pad_top: usize,
}

impl Arena {
    pub fn new(arena_width: usize, arena_height: usize, pad_left: usize, pad_top: usize) -> Arena {
        Arena {
            width: arena_width,
            height: arena_height,
            pad_left,
            pad_top,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArenaPads {
    pub pad_left: usize,
    pub pad_top: usize,
    pub pad_right: usize,
    pub pad_bottom: usize,
}

impl ArenaPads {
    pub fn constant(v: usize) -> ArenaPads {
        ArenaPads::new(v, v, v, v)
    }

    pub fn new(pad_left: usize, pad_top: usize, pad_right: usize, pad_bottom: usize) -> ArenaPads {
        ArenaPads {
            pad_left,
            pad_top,
            pad_right,
            pad_bottom,
        }
    }

    /// Pads needed so every tap of the kernel lands inside the arena.
    ///
    /// Even sized kernels have the anchor past the middle, so they need one
    /// more column (row) on the left (top) than on the right (bottom).
    pub fn from_kernel_shape(kernel_shape: KernelShape) -> ArenaPads {
        let (anchor_y, anchor_x) = kernel_shape.anchor();
        ArenaPads::new(
            anchor_x,
            anchor_y,
            kernel_shape.width - 1 - anchor_x,
            kernel_shape.height - 1 - anchor_y,
        )
    }
}

/// Pads an image with chosen border strategy
pub fn make_arena(
    image: &GrayImage,
    pads: ArenaPads,
    border_mode: EdgeMode,
) -> Result<(Vec<u8>, Arena), FilterError> {
    image.check_layout()?;
    let image_size = image.size();
    let ImageSize { width, height } = image_size;

    let arena_width = width + pads.pad_left + pads.pad_right;
    let arena_height = height + pads.pad_top + pads.pad_bottom;

    let border_value = match border_mode {
        EdgeMode::Constant(v) => v,
        _ => 0,
    };

    let mut padded_image = vec![border_value; arena_width * arena_height];

    let column_map = (0..arena_width)
        .map(|x| {
            resolve_index(
                border_mode,
                x as isize - pads.pad_left as isize,
                width as isize,
            )
        })
        .collect::<Vec<Option<usize>>>();

    let stride = image.row_stride() as usize;
    let source = image.data.as_ref();

    for (y, dst_row) in padded_image.chunks_exact_mut(arena_width).enumerate() {
        let Some(src_y) = resolve_index(
            border_mode,
            y as isize - pads.pad_top as isize,
            height as isize,
        ) else {
            continue;
        };
        let src_row = &source[src_y * stride..src_y * stride + width];
        for (dst, src_x) in dst_row.iter_mut().zip(column_map.iter()) {
            if let Some(src_x) = *src_x {
                *dst = src_row[src_x];
            }
        }
    }

    Ok((
        padded_image,
        Arena::new(arena_width, arena_height, pads.pad_left, pads.pad_top),
    ))
}
