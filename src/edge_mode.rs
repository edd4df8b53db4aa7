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

use std::str::FromStr;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Declares an edge handling mode
///
/// The same rule applies to every kernel tap that falls outside the image,
/// on all four sides.
pub enum EdgeMode {
    /// If kernel goes out of bounds it will be clipped to an edge and edge pixel replicated across filter
    #[default]
    Clamp,
    /// If kernel goes out of bounds image will be tiled with rule `defgh|abcdefgh|abcde`
    Wrap,
    /// If filter goes out of bounds image will be replicated with rule `fedcba|abcdefgh|hgfedcb`
    Reflect,
    /// If filter goes out of bounds image will be replicated with rule `gfedcb|abcdefgh|gfedcba`
    Reflect101,
    /// If filter goes out of bounds image will be replicated with provided constant
    Constant(u8),
}

impl FromStr for EdgeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamp" | "replicate" => Ok(EdgeMode::Clamp),
            "wrap" => Ok(EdgeMode::Wrap),
            "reflect" => Ok(EdgeMode::Reflect),
            "reflect101" => Ok(EdgeMode::Reflect101),
            "zero" => Ok(EdgeMode::Constant(0)),
            _ => match s.strip_prefix("constant:") {
                Some(value) => value
                    .parse::<u8>()
                    .map(EdgeMode::Constant)
                    .map_err(|_| format!("Invalid border constant: '{value}'")),
                None => Err(format!("Unknown edge mode: '{s}'")),
            },
        }
    }
}

#[inline]
pub(crate) fn reflect_index(i: isize, n: isize) -> usize {
    let period = 2 * n;
    let m = i.rem_euclid(period);
    if m < n {
        m as usize
    } else {
        (period - m - 1) as usize
    }
}

#[inline]
pub(crate) fn reflect_index_101(i: isize, n: isize) -> usize {
    let n_r = n - 1;
    if n_r == 0 {
        return 0;
    }
    let period = 2 * n_r;
    let m = i.rem_euclid(period);
    if m < n {
        m as usize
    } else {
        (period - m) as usize
    }
}

/// Maps a possibly out-of-bounds coordinate onto `0..n`.
///
/// Returns `None` when the tap must read the border constant instead.
#[inline]
pub(crate) fn resolve_index(edge_mode: EdgeMode, i: isize, n: isize) -> Option<usize> {
    if i >= 0 && i < n {
        return Some(i as usize);
    }
    match edge_mode {
        EdgeMode::Clamp => Some(i.clamp(0, n - 1) as usize),
        EdgeMode::Wrap => Some(i.rem_euclid(n) as usize),
        EdgeMode::Reflect => Some(reflect_index(i, n)),
        EdgeMode::Reflect101 => Some(reflect_index_101(i, n)),
        EdgeMode::Constant(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_all(edge_mode: EdgeMode, range: std::ops::Range<isize>, n: isize) -> Vec<usize> {
        range
            .map(|i| resolve_index(edge_mode, i, n).unwrap())
            .collect()
    }

    #[test]
    fn test_clamp_replicates_edges() {
        assert_eq!(
            resolve_all(EdgeMode::Clamp, -3..7, 4),
            vec![0, 0, 0, 0, 1, 2, 3, 3, 3, 3]
        );
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            resolve_all(EdgeMode::Wrap, -3..7, 4),
            vec![1, 2, 3, 0, 1, 2, 3, 0, 1, 2]
        );
    }

    #[test]
    fn test_reflect() {
        assert_eq!(
            resolve_all(EdgeMode::Reflect, -3..7, 4),
            vec![2, 1, 0, 0, 1, 2, 3, 3, 2, 1]
        );
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(
            resolve_all(EdgeMode::Reflect101, -3..7, 4),
            vec![3, 2, 1, 0, 1, 2, 3, 2, 1, 0]
        );
        assert_eq!(resolve_all(EdgeMode::Reflect101, -2..3, 1), vec![0; 5]);
    }

    #[test]
    fn test_constant_reads_border() {
        assert_eq!(resolve_index(EdgeMode::Constant(7), -1, 4), None);
        assert_eq!(resolve_index(EdgeMode::Constant(7), 2, 4), Some(2));
    }

    #[test]
    fn test_parse_edge_mode() {
        assert_eq!("replicate".parse::<EdgeMode>(), Ok(EdgeMode::Clamp));
        assert_eq!("zero".parse::<EdgeMode>(), Ok(EdgeMode::Constant(0)));
        assert_eq!(
            "constant:128".parse::<EdgeMode>(),
            Ok(EdgeMode::Constant(128))
        );
        assert!("constant:300".parse::<EdgeMode>().is_err());
        assert!("mirror".parse::<EdgeMode>().is_err());
    }
}
