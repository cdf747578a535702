/// Editor document state
///
/// Owns the loaded photo, the viewport-cropped result of the current
/// filter, the filter selection, and the presentation-only view
/// transform. Filter passes run in the background, so every pass carries
/// a generation token; only a completion matching the latest token may
/// mutate state, which keeps a slow stale pass from overwriting a newer
/// selection.

use iced::Size;
use image::DynamicImage;

use crate::filters::Filter;
use crate::geometry;

use super::transform::ViewTransform;

/// What the update loop should do after a filter selection.
pub enum FilterRequest {
    /// No image loaded; nothing to run.
    Ignored,
    /// Selection cleared; show the original again.
    ShowOriginal,
    /// Run a background pass over the given source.
    Run {
        generation: u64,
        image: DynamicImage,
    },
}

pub struct EditorState {
    original: Option<DynamicImage>,
    filtered: Option<DynamicImage>,
    filter: Filter,
    transform: ViewTransform,
    /// Token of the most recent filter request; bumped whenever a pending
    /// pass must be invalidated.
    generation: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            original: None,
            filtered: None,
            filter: Filter::None,
            transform: ViewTransform::identity(),
            generation: 0,
        }
    }

    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The image the canvas should render: the cropped filter output when
    /// one is current, otherwise the full original.
    pub fn displayed(&self) -> Option<&DynamicImage> {
        self.filtered.as_ref().or(self.original.as_ref())
    }

    /// Install a freshly loaded photo. Clears the filter output, resets
    /// the selection and the view transform, and invalidates any pass
    /// still in flight.
    pub fn load(&mut self, image: DynamicImage) {
        self.original = Some(image);
        self.filtered = None;
        self.filter = Filter::None;
        self.transform.reset();
        self.generation += 1;
    }

    /// Record a new filter selection and say what to do about it.
    pub fn select_filter(&mut self, filter: Filter) -> FilterRequest {
        self.filter = filter;

        let Some(original) = self.original.as_ref() else {
            return FilterRequest::Ignored;
        };

        if filter == Filter::None {
            self.filtered = None;
            self.generation += 1;
            return FilterRequest::ShowOriginal;
        }

        self.generation += 1;
        FilterRequest::Run {
            generation: self.generation,
            image: original.clone(),
        }
    }

    /// Accept a completed filter pass. Returns false (and changes
    /// nothing) when the completion is stale.
    pub fn accept_filtered(&mut self, generation: u64, image: DynamicImage) -> bool {
        if generation != self.generation {
            return false;
        }

        self.filtered = Some(image);
        true
    }

    /// The image a save should persist: the current filter output, or a
    /// fresh viewport crop of the original when no filter is applied.
    /// The view transform plays no part here.
    pub fn image_to_save(&self, viewport: Size) -> Option<DynamicImage> {
        if let Some(filtered) = &self.filtered {
            return Some(filtered.clone());
        }

        self.original
            .as_ref()
            .and_then(|original| geometry::crop_to_viewport(original, viewport))
    }

    pub fn pinch(&mut self, factor: f32) {
        self.transform.pinch(factor);
    }

    pub fn pan(&mut self, delta: cgmath::Vector2<f32>) {
        self.transform.pan(delta);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    fn viewport() -> Size {
        Size::new(geometry::VIEWPORT_SIZE, geometry::VIEWPORT_SIZE)
    }

    fn photo(width: u32, height: u32) -> DynamicImage {
        DynamicImage::new_rgb8(width, height)
    }

    #[test]
    fn test_load_resets_selection_and_transform() {
        let mut editor = EditorState::new();
        editor.load(photo(800, 600));

        if let FilterRequest::Run { generation, image } = editor.select_filter(Filter::Sepia) {
            editor.accept_filtered(generation, Filter::Sepia.apply_to(&image));
        } else {
            panic!("expected a filter pass");
        }
        editor.pinch(2.0);
        editor.pan(Vector2::new(40.0, 0.0));

        editor.load(photo(1000, 1000));

        assert_eq!(editor.filter(), Filter::None);
        assert!(editor.transform().is_identity());
        assert_eq!(
            editor.displayed().map(|i| (i.width(), i.height())),
            Some((1000, 1000))
        );
    }

    #[test]
    fn test_select_filter_without_image_is_ignored() {
        let mut editor = EditorState::new();

        assert!(matches!(
            editor.select_filter(Filter::Sketch),
            FilterRequest::Ignored
        ));
        assert!(editor.displayed().is_none());
    }

    #[test]
    fn test_select_none_restores_the_full_original() {
        let mut editor = EditorState::new();
        editor.load(photo(800, 600));

        // Run and accept a couple of passes, then clear the selection.
        for filter in [Filter::Sepia, Filter::Mono] {
            if let FilterRequest::Run { generation, image } = editor.select_filter(filter) {
                editor.accept_filtered(generation, filter.apply_to(&image));
            } else {
                panic!("expected a filter pass");
            }
        }

        assert!(matches!(
            editor.select_filter(Filter::None),
            FilterRequest::ShowOriginal
        ));

        // The display goes back to the uncropped original, however many
        // filter switches happened before.
        assert_eq!(
            editor.displayed().map(|i| (i.width(), i.height())),
            Some((800, 600))
        );
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut editor = EditorState::new();
        editor.load(photo(800, 600));

        let FilterRequest::Run {
            generation: sepia_generation,
            ..
        } = editor.select_filter(Filter::Sepia)
        else {
            panic!("expected a filter pass");
        };
        let FilterRequest::Run {
            generation: mono_generation,
            image,
        } = editor.select_filter(Filter::Mono)
        else {
            panic!("expected a filter pass");
        };

        // The mono pass lands first; the late sepia pass must lose.
        let mono_result = Filter::Mono.apply_to(&image);
        assert!(editor.accept_filtered(mono_generation, mono_result.clone()));
        assert!(!editor.accept_filtered(sepia_generation, photo(10, 10)));

        assert_eq!(
            editor.displayed().map(|i| i.to_rgba8().into_raw()),
            Some(mono_result.to_rgba8().into_raw())
        );
    }

    #[test]
    fn test_completion_after_clearing_selection_is_discarded() {
        let mut editor = EditorState::new();
        editor.load(photo(800, 600));

        let FilterRequest::Run { generation, .. } = editor.select_filter(Filter::Sepia) else {
            panic!("expected a filter pass");
        };
        editor.select_filter(Filter::None);

        assert!(!editor.accept_filtered(generation, photo(10, 10)));
        assert_eq!(
            editor.displayed().map(|i| (i.width(), i.height())),
            Some((800, 600))
        );
    }

    #[test]
    fn test_completion_after_reload_is_discarded() {
        let mut editor = EditorState::new();
        editor.load(photo(800, 600));

        let FilterRequest::Run { generation, .. } = editor.select_filter(Filter::Mono) else {
            panic!("expected a filter pass");
        };
        editor.load(photo(640, 480));

        assert!(!editor.accept_filtered(generation, photo(10, 10)));
    }

    #[test]
    fn test_save_prefers_the_filter_output() {
        let mut editor = EditorState::new();
        editor.load(photo(800, 600));

        let FilterRequest::Run { generation, image } = editor.select_filter(Filter::Sepia) else {
            panic!("expected a filter pass");
        };
        let cropped = geometry::crop_to_viewport(&Filter::Sepia.apply_to(&image), viewport())
            .expect("crop should succeed");
        editor.accept_filtered(generation, cropped);

        let saved = editor.image_to_save(viewport()).unwrap();
        assert_eq!((saved.width(), saved.height()), (300, 300));
    }

    #[test]
    fn test_save_crops_the_original_when_unfiltered() {
        let mut editor = EditorState::new();
        editor.load(photo(4000, 3000));

        let saved = editor.image_to_save(viewport()).unwrap();
        assert_eq!((saved.width(), saved.height()), (300, 300));
    }

    #[test]
    fn test_save_without_an_image_is_empty() {
        let editor = EditorState::new();
        assert!(editor.image_to_save(viewport()).is_none());
    }

    #[test]
    fn test_gestures_do_not_leak_into_saves() {
        let mut editor = EditorState::new();
        editor.load(photo(600, 600));

        let untouched = editor.image_to_save(viewport()).unwrap();

        editor.pinch(2.5);
        editor.pan(Vector2::new(120.0, -80.0));
        let panned = editor.image_to_save(viewport()).unwrap();

        assert_eq!(
            untouched.to_rgba8().into_raw(),
            panned.to_rgba8().into_raw()
        );
    }
}
