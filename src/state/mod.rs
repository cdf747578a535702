/// State management module
///
/// This module handles all application state, including:
/// - The editor's document model and filter-pass bookkeeping (editor.rs)
/// - The presentation-only zoom/pan transform (transform.rs)
/// - The settings screen's row descriptors (settings.rs)

pub mod editor;
pub mod settings;
pub mod transform;

pub use editor::{EditorState, FilterRequest};
pub use transform::ViewTransform;
