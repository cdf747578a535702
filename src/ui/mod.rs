/// UI module
///
/// This module holds the visual pieces of the application:
/// - The editor display surface and its gestures (canvas.rs)
/// - The editor screen layout (editor.rs)
/// - The settings list (settings.rs)

pub mod canvas;
pub mod editor;
pub mod settings;

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Blocking informational dialog with a single OK button.
pub fn alert(title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
