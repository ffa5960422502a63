//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct for configuring
//! error diffusion.

/// Configuration options for error diffusion.
///
/// # Defaults
///
/// - Enabled
/// - Error threshold: 20.0 (Euclidean RGB norm; smaller errors are dropped)
/// - Propagation: 0.3 (share of the error given to each of the right and
///   lower neighbors)
///
/// # Example
///
/// ```
/// use mosaic_core::DitherOptions;
///
/// let options = DitherOptions::new()
///     .error_threshold(10.0)
///     .propagation(0.25);
/// assert!(options.enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherOptions {
    /// Whether quantization error is diffused at all.
    ///
    /// Default: `true`
    pub enabled: bool,

    /// Errors whose Euclidean norm is not strictly above this are dropped.
    ///
    /// Default: `20.0`
    pub error_threshold: f64,

    /// Fraction of the error added to the right neighbor, and separately to
    /// the neighbor below.
    ///
    /// Default: `0.3`
    pub propagation: f64,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            error_threshold: 20.0,
            propagation: 0.3,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with diffusion switched off.
    #[inline]
    pub fn disabled() -> Self {
        Self::default().enabled(false)
    }

    /// Enable or disable diffusion.
    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the error norm threshold.
    #[inline]
    pub fn error_threshold(mut self, threshold: f64) -> Self {
        self.error_threshold = threshold;
        self
    }

    /// Set the propagation factor.
    #[inline]
    pub fn propagation(mut self, factor: f64) -> Self {
        self.propagation = factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DitherOptions::new();
        assert!(opts.enabled);
        assert_eq!(opts.error_threshold, 20.0);
        assert_eq!(opts.propagation, 0.3);
    }

    #[test]
    fn test_builder_chaining() {
        let opts = DitherOptions::new().error_threshold(5.0).propagation(0.5);
        assert_eq!(opts.error_threshold, 5.0);
        assert_eq!(opts.propagation, 0.5);
        assert!(!DitherOptions::disabled().enabled);
    }
}
