/// Pixel transforms for the built-in filters
///
/// All three transforms work on an RGBA copy of the source, leave the
/// alpha channel untouched, and preserve the image dimensions.

use image::DynamicImage;

/// Rec. 709 luma weights, shared by the mono and sketch filters.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Classic sepia tone: each output channel is a fixed weighted mix of the
/// input channels, clamped to the displayable range.
pub fn sepia(image: &DynamicImage) -> DynamicImage {
    let mut buffer = image.to_rgba8();

    for pixel in buffer.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let (r, g, b) = (r as f32, g as f32, b as f32);

        pixel.0 = [
            (r * 0.393 + g * 0.769 + b * 0.189).min(255.0) as u8,
            (r * 0.349 + g * 0.686 + b * 0.168).min(255.0) as u8,
            (r * 0.272 + g * 0.534 + b * 0.131).min(255.0) as u8,
            a,
        ];
    }

    DynamicImage::ImageRgba8(buffer)
}

/// Luminance grayscale: every channel becomes the Rec. 709 luma.
pub fn mono(image: &DynamicImage) -> DynamicImage {
    let mut buffer = image.to_rgba8();

    for pixel in buffer.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let luma = (r as f32 * LUMA_R + g as f32 * LUMA_G + b as f32 * LUMA_B)
            .min(255.0) as u8;

        pixel.0 = [luma, luma, luma, a];
    }

    DynamicImage::ImageRgba8(buffer)
}

/// Pencil-sketch look: Sobel edge magnitude over the luma plane, drawn as
/// dark strokes on white paper.
pub fn sketch(image: &DynamicImage) -> DynamicImage {
    let source = image.to_rgba8();
    let width = source.width() as usize;
    let height = source.height() as usize;

    if width == 0 || height == 0 {
        return DynamicImage::ImageRgba8(source);
    }

    // Precompute the luma plane so each Sobel tap is a single read.
    let raw = source.as_raw();
    let mut luma = vec![0.0f32; width * height];
    for (i, chunk) in raw.chunks_exact(4).enumerate() {
        luma[i] =
            chunk[0] as f32 * LUMA_R + chunk[1] as f32 * LUMA_G + chunk[2] as f32 * LUMA_B;
    }

    let sample = |x: i32, y: i32| -> f32 {
        let cx = x.clamp(0, width as i32 - 1) as usize;
        let cy = y.clamp(0, height as i32 - 1) as usize;
        luma[cy * width + cx]
    };

    let mut output = source.clone();
    for y in 0..height {
        for x in 0..width {
            let (ix, iy) = (x as i32, y as i32);

            let gx = -sample(ix - 1, iy - 1) - 2.0 * sample(ix - 1, iy) - sample(ix - 1, iy + 1)
                + sample(ix + 1, iy - 1)
                + 2.0 * sample(ix + 1, iy)
                + sample(ix + 1, iy + 1);
            let gy = -sample(ix - 1, iy - 1) - 2.0 * sample(ix, iy - 1) - sample(ix + 1, iy - 1)
                + sample(ix - 1, iy + 1)
                + 2.0 * sample(ix, iy + 1)
                + sample(ix + 1, iy + 1);

            let magnitude = (gx * gx + gy * gy).sqrt();
            let ink = (255.0 - magnitude).clamp(0.0, 255.0) as u8;

            let pixel = output.get_pixel_mut(x as u32, y as u32);
            let alpha = pixel.0[3];
            pixel.0 = [ink, ink, ink, alpha];
        }
    }

    DynamicImage::ImageRgba8(output)
}
