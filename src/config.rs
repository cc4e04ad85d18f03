//! Layout configuration.
//!
//! Window size and the few metrics the layout compiler needs that are not
//! part of any node's style.

use crate::error::{LayoutError, LayoutResult};
use crate::types::Rgba;

/// Per-frame layout settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Window width in pixels; available width of the layout root.
    pub viewport_width: f32,
    /// Window height in pixels; available height of the layout root.
    pub viewport_height: f32,
    /// Pixels per solver unit.
    pub unit_scale: f32,
    /// Font size for text without an explicit `text_size`.
    pub default_font_size: f32,
    /// Color for text without an explicit `text_color`.
    pub default_text_color: Rgba,
    /// Advance width of one character as a fraction of the font size.
    pub char_width_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            unit_scale: 1.0,
            default_font_size: 16.0,
            default_text_color: Rgba::BLACK,
            char_width_ratio: 0.6,
            line_height: 1.2,
        }
    }
}

impl LayoutConfig {
    /// Default config for a `width × height` window.
    pub fn new(width: f32, height: f32) -> Self {
        Self::default().with_viewport(width, height)
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_unit_scale(mut self, scale: f32) -> Self {
        self.unit_scale = scale;
        self
    }

    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    pub fn with_default_text_color(mut self, color: Rgba) -> Self {
        self.default_text_color = color;
        self
    }

    pub fn with_char_width_ratio(mut self, ratio: f32) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Reject configurations the compiler cannot lay out.
    pub fn validate(&self) -> LayoutResult<()> {
        let (width, height) = (self.viewport_width, self.viewport_height);
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(LayoutError::InvalidViewport { width, height });
        }
        if !self.unit_scale.is_finite() || self.unit_scale <= 0.0 {
            return Err(LayoutError::InvalidUnitScale(self.unit_scale));
        }
        Ok(())
    }

    /// Pixels → solver units.
    #[inline]
    pub(crate) fn to_units(&self, px: f32) -> f32 {
        px / self.unit_scale
    }

    /// Solver units → pixels.
    #[inline]
    pub(crate) fn to_pixels(&self, units: f32) -> f32 {
        units * self.unit_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(LayoutConfig::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_viewport() {
        let err = LayoutConfig::new(-1.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidViewport { .. }));

        let err = LayoutConfig::new(f32::INFINITY, 10.0).validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidViewport { .. }));
    }

    #[test]
    fn test_invalid_unit_scale() {
        for scale in [0.0, -2.0, f32::NAN] {
            let err = LayoutConfig::default().with_unit_scale(scale).validate().unwrap_err();
            assert!(matches!(err, LayoutError::InvalidUnitScale(_)));
        }
    }

    #[test]
    fn test_unit_conversion() {
        let config = LayoutConfig::default().with_unit_scale(2.0);
        assert_eq!(config.to_units(50.0), 25.0);
        assert_eq!(config.to_pixels(25.0), 50.0);
    }
}
