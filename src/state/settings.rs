/// Row descriptors for the settings screen
///
/// The settings list is a fixed set of rows built once at startup and
/// handed to the screen at construction. Nothing here is persisted; the
/// switch row only flips an in-memory flag.

use std::path::Path;

/// Name shown by the informational dialog when a row is tapped.
pub const AUTHOR: &str = "Ayman REBAI";

/// How a row is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Title,
    TitleSubtitle,
    TitleSwitch,
}

/// One immutable settings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub title: String,
    pub subtitle: Option<String>,
    pub kind: RowKind,
}

impl SettingsRow {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            kind: RowKind::Title,
        }
    }

    pub fn with_subtitle(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: Some(subtitle.into()),
            kind: RowKind::TitleSubtitle,
        }
    }

    pub fn switch(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            kind: RowKind::TitleSwitch,
        }
    }
}

/// The rows the settings screen shows.
///
/// `save_dir` is where saved crops land; shown as a subtitle so users can
/// find their output.
pub fn default_rows(save_dir: Option<&Path>) -> Vec<SettingsRow> {
    let save_location = save_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| String::from("Pictures directory unavailable"));

    vec![
        SettingsRow::title("About Photo Crop"),
        SettingsRow::with_subtitle("Save location", save_location),
        SettingsRow::switch("Dark theme"),
    ]
}
