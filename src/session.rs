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

use crate::{
    filter_2d, get_kernel, EdgeMode, FilterError, FilterSelection, GrayImage, GrayImageMut,
    Kernel, ThreadingPolicy,
};

/// Working state of an interactive filtering session
///
/// Holds the loaded image, at most one user defined kernel and the most recent
/// filtered result. Every filter reads the loaded image, never the previous result.
#[derive(Debug, Default)]
pub struct FilterSession {
    source: Option<GrayImage<'static>>,
    processed: Option<GrayImage<'static>>,
    user_kernel: Option<Kernel>,
    border_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
}

impl FilterSession {
    pub fn new() -> FilterSession {
        FilterSession::default()
    }

    /// Session that filters with the given border rule and threads
    pub fn with_options(border_mode: EdgeMode, threading_policy: ThreadingPolicy) -> FilterSession {
        FilterSession {
            border_mode,
            threading_policy,
            ..FilterSession::default()
        }
    }

    /// Replaces the loaded image and drops the previous result
    pub fn load_image(&mut self, image: GrayImage<'static>) -> Result<(), FilterError> {
        image.check_layout()?;
        log::debug!("Loaded {}x{} image", image.width, image.height);
        self.source = Some(image);
        self.processed = None;
        Ok(())
    }

    pub fn image(&self) -> Option<&GrayImage<'static>> {
        self.source.as_ref()
    }

    /// Result of the last successful filter
    pub fn processed(&self) -> Option<&GrayImage<'static>> {
        self.processed.as_ref()
    }

    pub fn user_kernel(&self) -> Option<&Kernel> {
        self.user_kernel.as_ref()
    }

    /// Defines the user kernel from row-major values, replacing any previous one.
    ///
    /// On failure the previous kernel is kept.
    pub fn define_kernel(&mut self, size: i64, values: &[f32]) -> Result<&Kernel, FilterError> {
        let kernel = Kernel::build_from_values(size, values)?;
        Ok(self.set_user_kernel(kernel))
    }

    /// Same as [FilterSession::define_kernel] from whitespace separated text
    pub fn define_kernel_from_text(&mut self, size: i64, text: &str) -> Result<&Kernel, FilterError> {
        let kernel = Kernel::parse(size, text)?;
        Ok(self.set_user_kernel(kernel))
    }

    fn set_user_kernel(&mut self, kernel: Kernel) -> &Kernel {
        log::info!(
            "User filter defined: {}x{}",
            kernel.shape().height,
            kernel.shape().width
        );
        self.user_kernel.insert(kernel)
    }

    pub fn reset_kernel(&mut self) {
        self.user_kernel = None;
        log::info!("User filter reset.");
    }

    /// Filters the loaded image and stores the result
    pub fn apply(&mut self, selection: FilterSelection) -> Result<&GrayImage<'static>, FilterError> {
        let source = self.source.as_ref().ok_or(FilterError::NoImageLoaded)?;

        let named_kernel;
        let kernel = match selection {
            FilterSelection::Named(id) => {
                log::debug!("Applying {id}");
                named_kernel = get_kernel(id);
                &named_kernel
            }
            FilterSelection::UserDefined => {
                let kernel = self
                    .user_kernel
                    .as_ref()
                    .ok_or(FilterError::NoKernelDefined)?;
                log::info!("User Defined Filter Applied:\n{kernel}");
                kernel
            }
        };

        let mut dst = GrayImageMut::default();
        filter_2d(
            source,
            &mut dst,
            kernel,
            self.border_mode,
            self.threading_policy,
        )?;
        Ok(self.processed.insert(dst.into_immutable()))
    }

    /// Takes the last result out of the session, e.g. for saving
    pub fn take_processed(&mut self) -> Option<GrayImage<'static>> {
        self.processed.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterId;

    fn session_with_image(value: u8) -> FilterSession {
        let mut session = FilterSession::new();
        session
            .load_image(GrayImage::from_vec(vec![value; 10 * 6], 10, 6).unwrap())
            .unwrap();
        session
    }

    #[test]
    fn test_apply_requires_image() {
        let mut session = FilterSession::new();
        assert_eq!(
            session
                .apply(FilterSelection::Named(FilterId::Laplacian))
                .unwrap_err(),
            FilterError::NoImageLoaded
        );
        session.define_kernel(1, &[1.]).unwrap();
        assert_eq!(
            session.apply(FilterSelection::UserDefined).unwrap_err(),
            FilterError::NoImageLoaded
        );
    }

    #[test]
    fn test_apply_user_kernel_lifecycle() {
        let mut session = session_with_image(60);
        assert!(session.user_kernel().is_none());
        assert_eq!(
            session.apply(FilterSelection::UserDefined).unwrap_err(),
            FilterError::NoKernelDefined
        );

        session.define_kernel(1, &[2.]).unwrap();
        let result = session.apply(FilterSelection::UserDefined).unwrap();
        assert!(result.data.iter().all(|&x| x == 120));

        session.define_kernel_from_text(1, "0.5").unwrap();
        let result = session.apply(FilterSelection::UserDefined).unwrap();
        assert!(result.data.iter().all(|&x| x == 30));

        session.reset_kernel();
        assert_eq!(
            session.apply(FilterSelection::UserDefined).unwrap_err(),
            FilterError::NoKernelDefined
        );
    }

    #[test]
    fn test_failed_define_keeps_previous_kernel() {
        let mut session = session_with_image(1);
        session.define_kernel(1, &[3.]).unwrap();
        assert!(session.define_kernel(2, &[1., 2., 3.]).is_err());
        assert!(session.define_kernel_from_text(-1, "1").is_err());
        assert_eq!(session.user_kernel().unwrap().weights(), &[3.]);
    }

    #[test]
    fn test_filters_always_read_loaded_image() {
        let mut session = session_with_image(100);
        session.define_kernel(1, &[2.]).unwrap();
        session.apply(FilterSelection::UserDefined).unwrap();
        let result = session.apply(FilterSelection::UserDefined).unwrap();
        assert!(result.data.iter().all(|&x| x == 200));
        assert!(session.image().unwrap().data.iter().all(|&x| x == 100));
    }

    #[test]
    fn test_named_filter_and_reload() {
        let mut session = session_with_image(90);
        session.apply(FilterId::PointDetection.into()).unwrap();
        let processed = session.take_processed().unwrap();
        assert_eq!((processed.width, processed.height), (10, 6));
        assert!(processed.data.iter().all(|&x| x == 90));
        assert!(session.processed().is_none());

        session.apply(FilterId::Laplacian.into()).unwrap();
        session
            .load_image(GrayImage::from_vec(vec![0; 4], 2, 2).unwrap())
            .unwrap();
        assert!(session.processed().is_none());
    }
}
