/// Image filters
///
/// This module handles:
/// - The closed set of filters the editor offers (ops.rs holds the pixel math)
/// - The background filter pass: apply to the full-resolution source, then
///   crop the result to the viewport

pub mod ops;

use iced::Size;
use image::DynamicImage;

use crate::geometry;

/// The filters offered by the editor's selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    None,
    Sepia,
    Mono,
    Sketch,
}

impl Filter {
    /// All variants, in the order the selector shows them.
    pub const ALL: [Filter; 4] = [Filter::None, Filter::Sepia, Filter::Mono, Filter::Sketch];

    /// Label shown on the selector.
    pub fn label(self) -> &'static str {
        match self {
            Filter::None => "None",
            Filter::Sepia => "Sepia",
            Filter::Mono => "Mono",
            Filter::Sketch => "Sketch",
        }
    }

    /// Apply this filter to an image. `None` is the identity.
    pub fn apply_to(self, image: &DynamicImage) -> DynamicImage {
        match self {
            Filter::None => image.clone(),
            Filter::Sepia => ops::sepia(image),
            Filter::Mono => ops::mono(image),
            Filter::Sketch => ops::sketch(image),
        }
    }
}

/// Run a filter pass in the background.
///
/// Applies `filter` to the full-resolution source, then crops the result
/// to the centered viewport. The error carries a log-friendly message;
/// a crop that reaches outside the filtered image's bounds yields an
/// error rather than a partial image.
pub async fn apply(
    image: DynamicImage,
    filter: Filter,
    viewport: Size,
) -> Result<DynamicImage, String> {
    // Spawn blocking because the pixel work is CPU-intensive
    tokio::task::spawn_blocking(move || {
        let filtered = filter.apply_to(&image);

        geometry::crop_to_viewport(&filtered, viewport).ok_or_else(|| {
            format!(
                "Viewport crop exceeds the {}x{} filtered image",
                filtered.width(),
                filtered.height()
            )
        })
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filters_have_distinct_labels() {
        let labels: Vec<&str> = Filter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["None", "Sepia", "Mono", "Sketch"]);
    }

    #[test]
    fn test_none_is_identity() {
        let image = DynamicImage::new_rgb8(4, 4);
        let out = Filter::None.apply_to(&image);

        assert_eq!(image.to_rgba8().as_raw(), out.to_rgba8().as_raw());
    }

    #[test]
    fn test_apply_crops_filtered_output_to_viewport() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let image = DynamicImage::new_rgb8(800, 600);
        let viewport = Size::new(300.0, 300.0);

        let cropped = rt
            .block_on(apply(image, Filter::Sepia, viewport))
            .unwrap();
        assert_eq!((cropped.width(), cropped.height()), (300, 300));
    }

    #[test]
    fn test_apply_reports_starved_sources() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        // 400x100 cannot fill a square viewport after scaling.
        let image = DynamicImage::new_rgb8(400, 100);
        let viewport = Size::new(300.0, 300.0);

        assert!(rt.block_on(apply(image, Filter::Mono, viewport)).is_err());
    }
}
