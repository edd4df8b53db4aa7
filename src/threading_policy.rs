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

use std::num::NonZeroUsize;
use std::thread::available_parallelism;

/// How many workers share the rows of one filtering call
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum ThreadingPolicy {
    /// Run on the calling thread.
    #[default]
    Single,
    /// Scale with image area, up to the number of logical CPUs.
    Adaptive,
    /// As [ThreadingPolicy::Adaptive], leaving the given number of CPUs idle.
    AdaptiveReserve(NonZeroUsize),
    /// Always use exactly this many workers.
    Fixed(NonZeroUsize),
}

/// One worker per this many output pixels
const PIXELS_PER_THREAD: usize = 256 * 256;

impl ThreadingPolicy {
    /// Worker count for a `width` x `height` output, never zero.
    pub fn thread_count(&self, width: usize, height: usize) -> usize {
        let wanted = (width.saturating_mul(height) / PIXELS_PER_THREAD).max(1);
        match *self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => wanted.min(cpu_count().max(2)),
            ThreadingPolicy::AdaptiveReserve(reserve) => {
                let usable = cpu_count().saturating_sub(reserve.get()).max(1);
                wanted.min(usable)
            }
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        }
    }
}

fn cpu_count() -> usize {
    available_parallelism().map_or(1, NonZeroUsize::get)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_fixed() {
        assert_eq!(ThreadingPolicy::Single.thread_count(4096, 4096), 1);
        let fixed = ThreadingPolicy::Fixed(NonZeroUsize::new(3).unwrap());
        assert_eq!(fixed.thread_count(2, 2), 3);
    }

    #[test]
    fn test_adaptive_small_image_uses_one_thread() {
        assert_eq!(ThreadingPolicy::Adaptive.thread_count(400, 307), 1);
        let reserve = ThreadingPolicy::AdaptiveReserve(NonZeroUsize::new(1).unwrap());
        assert_eq!(reserve.thread_count(16, 16), 1);
    }

    #[test]
    fn test_reserve_never_drops_to_zero() {
        let reserve = ThreadingPolicy::AdaptiveReserve(NonZeroUsize::new(usize::MAX).unwrap());
        assert_eq!(reserve.thread_count(8192, 8192), 1);
    }
}
