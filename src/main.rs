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

use argh::FromArgs;
use edgemask::{
    gray_from_dynamic, save_gray, EdgeMode, FilterId, FilterSelection, FilterSession,
    ThreadingPolicy, PREVIEW_SIZE,
};
use image::ImageReader;
use std::num::NonZeroUsize;
use std::time::Instant;

/// Applies a detection mask to a grayscale copy of an image
#[derive(Debug, FromArgs)]
struct Args {
    /// input image path
    #[argh(positional)]
    input: Option<String>,

    /// output image path, written as JPEG for .jpg/.jpeg and as PNG otherwise
    #[argh(positional)]
    output: Option<String>,

    /// catalog filter identifier, see --list
    #[argh(option, short = 'f', default = "FilterId::Laplacian", from_str_fn(to_filter_id))]
    filter: FilterId,

    /// side of a user defined square kernel, requires --values
    #[argh(option, short = 'k')]
    kernel_size: Option<i64>,

    /// whitespace separated user kernel weights, row-major
    #[argh(option, short = 'v')]
    values: Option<String>,

    /// border rule: clamp, wrap, reflect, reflect101, zero or constant:<0-255>
    #[argh(option, short = 'b', default = "EdgeMode::Clamp")]
    border: EdgeMode,

    /// scale the input to 400x307 before filtering
    #[argh(switch, short = 'r')]
    resize: bool,

    /// number of worker threads (at least 1), adaptive when omitted
    #[argh(option, short = 't', from_str_fn(to_thread_count))]
    threads: Option<NonZeroUsize>,

    /// print catalog filters and exit
    #[argh(switch, short = 'l')]
    list: bool,
}

fn to_filter_id(value: &str) -> Result<FilterId, String> {
    value.parse::<FilterId>().map_err(|e| e.to_string())
}

fn to_thread_count(value: &str) -> Result<NonZeroUsize, String> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| format!("thread count must be a positive integer, got '{value}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.list {
        for id in FilterId::ALL {
            println!("{:<28}{}", id.name(), id.title());
        }
        return Ok(());
    }

    let (Some(input), Some(output)) = (args.input, args.output) else {
        return Err("input and output paths are required".into());
    };

    let threading_policy = match args.threads {
        Some(threads) => ThreadingPolicy::Fixed(threads),
        None => ThreadingPolicy::Adaptive,
    };

    let mut session = FilterSession::with_options(args.border, threading_policy);

    let dyn_image = ImageReader::open(&input)?.decode()?;
    let resize = args.resize.then_some(PREVIEW_SIZE);
    session.load_image(gray_from_dynamic(dyn_image, resize)?)?;

    let selection = match (args.kernel_size, args.values) {
        (Some(size), Some(values)) => {
            session.define_kernel_from_text(size, &values)?;
            FilterSelection::UserDefined
        }
        (None, None) => FilterSelection::Named(args.filter),
        _ => return Err("--kernel-size and --values must be given together".into()),
    };

    let start_time = Instant::now();
    session.apply(selection)?;
    log::info!("Filtered in {:.2?}", start_time.elapsed());

    let processed = session
        .take_processed()
        .ok_or("filter produced no image")?;
    save_gray(&processed, &output)?;
    log::info!("Image saved to {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_count_rejects_zero() {
        assert_eq!(to_thread_count("3"), Ok(NonZeroUsize::new(3).unwrap()));
        assert!(to_thread_count("0").is_err());
        assert!(to_thread_count("-2").is_err());
    }

    #[test]
    fn test_filter_id_flag() {
        assert_eq!(to_filter_id("roberts"), Ok(FilterId::Roberts));
        assert!(to_filter_id("canny").unwrap_err().contains("canny"));
    }
}
