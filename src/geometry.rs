/// Viewport and crop-rectangle arithmetic
///
/// The editor shows the current image inside a fixed square viewport.
/// The image itself is laid out on a larger "display surface" and drawn
/// aspect-fit; saving and filtering crop the source pixels to whatever
/// part of them sits under the viewport. This module holds the pure
/// geometry for that mapping.

use iced::{Point, Rectangle, Size};
use image::DynamicImage;

/// Side length of the square crop viewport, in logical points.
pub const VIEWPORT_SIZE: f32 = 300.0;

/// A crop region in source-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the display surface bounds for an image.
///
/// The surface takes the image's natural pixel size in points, but never
/// shrinks below the viewport on either axis, so the viewport always has
/// surface behind it.
pub fn display_bounds(image_width: u32, image_height: u32, viewport: Size) -> Size {
    Size::new(
        (image_width as f32).max(viewport.width),
        (image_height as f32).max(viewport.height),
    )
}

/// Express the viewport in the display surface's local coordinates.
///
/// The surface is centered on the viewport, so the viewport sits centered
/// inside the surface as well.
pub fn viewport_in_display(display: Size, viewport: Size) -> Rectangle {
    Rectangle::new(
        Point::new(
            (display.width - viewport.width) / 2.0,
            (display.height - viewport.height) / 2.0,
        ),
        viewport,
    )
}

/// Center an image inside `bounds` preserving its aspect ratio.
pub fn aspect_fit(image_width: u32, image_height: u32, bounds: Rectangle) -> Rectangle {
    if image_width == 0 || image_height == 0 {
        return Rectangle::new(bounds.position(), Size::ZERO);
    }

    let width = image_width as f32;
    let height = image_height as f32;
    let scale = (bounds.width / width).min(bounds.height / height);
    let fitted = Size::new(width * scale, height * scale);

    Rectangle::new(
        Point::new(
            bounds.x + (bounds.width - fitted.width) / 2.0,
            bounds.y + (bounds.height - fitted.height) / 2.0,
        ),
        fitted,
    )
}

/// Map a region of the display surface into source-pixel space.
///
/// The surface renders the source scaled to fit its own bounds, so the
/// resize ratio `source_width / display.width` is uniform across both
/// axes. Returns `None` when the scaled region has no extent or reaches
/// outside the source's pixel bounds; callers must treat that as "no
/// output".
pub fn compute_crop_rect(
    source_width: u32,
    source_height: u32,
    display: Size,
    region: Rectangle,
) -> Option<CropRect> {
    if source_width == 0 || source_height == 0 || display.width <= 0.0 {
        return None;
    }

    let ratio = f64::from(source_width) / f64::from(display.width);

    let x = (f64::from(region.x) * ratio).round();
    let y = (f64::from(region.y) * ratio).round();
    let width = (f64::from(region.width) * ratio).round();
    let height = (f64::from(region.height) * ratio).round();

    if width <= 0.0 || height <= 0.0 || x < 0.0 || y < 0.0 {
        return None;
    }

    let rect = CropRect {
        x: x as u32,
        y: y as u32,
        width: width as u32,
        height: height as u32,
    };

    if rect.x + rect.width > source_width || rect.y + rect.height > source_height {
        return None;
    }

    Some(rect)
}

/// Crop an image to the part of it that sits under a centered viewport.
///
/// Returns `None` when the viewport asks for more pixels than the source
/// can supply after scaling (tiny or extreme-aspect images).
pub fn crop_to_viewport(image: &DynamicImage, viewport: Size) -> Option<DynamicImage> {
    let display = display_bounds(image.width(), image.height(), viewport);
    let region = viewport_in_display(display, viewport);
    let rect = compute_crop_rect(image.width(), image.height(), display, region)?;

    Some(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
}
