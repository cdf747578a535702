/// Presentation-only transform for the displayed image
///
/// Zoom and drag gestures only move the on-screen rendering around inside
/// the viewport; they never touch the stored pixel data, and the crop
/// used for filtering and saving ignores them entirely.

use cgmath::Vector2;

/// Uniform scale plus translation, applied to the display surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoom level (1.0 = 100%)
    pub scale: f32,
    /// Pan offset in viewport coordinates
    pub offset: Vector2<f32>,
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vector2::new(0.0, 0.0),
        }
    }

    /// Accumulate an incremental zoom factor. Non-positive or non-finite
    /// factors are ignored; gesture deltas are always positive.
    pub fn pinch(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// Accumulate a drag delta. No clamping: the image may be dragged
    /// entirely out of the viewport.
    pub fn pan(&mut self, delta: Vector2<f32>) {
        self.offset += delta;
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinch_accumulates_multiplicatively() {
        let mut transform = ViewTransform::identity();

        transform.pinch(2.0);
        transform.pinch(1.5);

        assert_eq!(transform.scale, 3.0);
    }

    #[test]
    fn test_pinch_ignores_degenerate_factors() {
        let mut transform = ViewTransform::identity();

        transform.pinch(0.0);
        transform.pinch(-2.0);
        transform.pinch(f32::NAN);

        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_pan_accumulates_additively() {
        let mut transform = ViewTransform::identity();

        transform.pan(Vector2::new(10.0, -4.0));
        transform.pan(Vector2::new(-2.5, 1.0));

        assert_eq!(transform.offset, Vector2::new(7.5, -3.0));
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut transform = ViewTransform::identity();
        transform.pinch(3.0);
        transform.pan(Vector2::new(50.0, 50.0));
        assert!(!transform.is_identity());

        transform.reset();

        assert!(transform.is_identity());
    }
}
