use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Size, Task, Theme};
use std::path::PathBuf;

use cgmath::Vector2;

// Declare the application modules
mod filters;
mod geometry;
mod photos;
mod state;
mod ui;

use filters::Filter;
use photos::Photo;
use state::{EditorState, FilterRequest};
use ui::canvas::DisplayImage;
use ui::settings::SettingsScreen;

/// Fixed window size; everything is laid out around the square viewport.
const WINDOW_WIDTH: f32 = 420.0;
const WINDOW_HEIGHT: f32 = 700.0;

/// Main application state
struct PhotoCrop {
    /// Which tab is showing
    screen: Screen,
    /// The editor's document: original photo, filter output, transform
    editor: EditorState,
    /// GPU handle for whatever the editor currently displays
    display: Option<DisplayImage>,
    /// The settings list
    settings: SettingsScreen,
    /// Status message to display to the user
    status: String,
}

/// The two tabs of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Editor,
    Settings,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a tab
    ScreenSelected(Screen),
    /// User clicked the "Load Image" button
    LoadImage,
    /// Background decode completed
    PhotoLoaded(Result<Photo, String>),
    /// User picked a filter on the selector
    FilterSelected(Filter),
    /// Background filter pass completed
    FilterApplied {
        generation: u64,
        result: Result<Photo, String>,
    },
    /// User clicked the save button
    SaveImage,
    /// Background save completed
    SaveFinished(Result<PathBuf, String>),
    /// Wheel zoom over the canvas (incremental delta)
    Zoom(f32),
    /// Drag pan over the canvas (delta in canvas points)
    Pan(Vector2<f32>),
    /// User tapped a settings row
    SettingsRowPressed,
    /// User flipped the decorative settings switch
    SettingsToggled(usize, bool),
}

impl PhotoCrop {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let save_dir = photos::output_dir();
        let settings = SettingsScreen::new(state::settings::default_rows(save_dir.as_deref()));

        println!("🖼  Photo Crop ready");

        (
            PhotoCrop {
                screen: Screen::Editor,
                editor: EditorState::new(),
                display: None,
                settings,
                status: String::from("Load an image to get started."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScreenSelected(screen) => {
                self.screen = screen;
                Task::none()
            }

            Message::LoadImage => {
                // Show the native picker; cancellation changes nothing
                if let Some(path) = photos::pick_image() {
                    self.status = format!("Loading {}...", path.display());
                    return Task::perform(photos::load(path), Message::PhotoLoaded);
                }

                Task::none()
            }

            Message::PhotoLoaded(Ok(photo)) => {
                let (width, height) = (photo.image.width(), photo.image.height());
                self.editor.load(photo.image);
                self.refresh_display();
                self.status = format!("Loaded {}x{} image.", width, height);
                Task::none()
            }

            Message::PhotoLoaded(Err(error)) => {
                eprintln!("⚠️  {}", error);
                self.status = String::from("Failed to load image.");
                Task::none()
            }

            Message::FilterSelected(filter) => match self.editor.select_filter(filter) {
                FilterRequest::Ignored => Task::none(),
                FilterRequest::ShowOriginal => {
                    self.refresh_display();
                    self.status = String::from("Filter removed.");
                    Task::none()
                }
                FilterRequest::Run { generation, image } => {
                    self.status = format!("Applying {} filter...", filter.label());

                    let viewport = viewport_size();
                    Task::perform(filters::apply(image, filter, viewport), move |result| {
                        Message::FilterApplied {
                            generation,
                            result: result.map(Photo::new),
                        }
                    })
                }
            },

            Message::FilterApplied { generation, result } => {
                match result {
                    Ok(photo) => {
                        if self.editor.accept_filtered(generation, photo.image) {
                            self.refresh_display();
                            self.status = format!("{} filter applied.", self.editor.filter().label());
                        } else {
                            println!("⏭  Discarded stale filter pass #{}", generation);
                        }
                    }
                    Err(error) => {
                        // The previous display stays up; this is not a user-facing error
                        eprintln!("⚠️  Filter pass produced no image: {}", error);
                        self.status = String::from("Ready.");
                    }
                }
                Task::none()
            }

            Message::SaveImage => {
                if let Some(image) = self.editor.image_to_save(viewport_size()) {
                    self.status = String::from("Saving...");
                    return Task::perform(
                        photos::save_to_pictures(Photo::new(image)),
                        Message::SaveFinished,
                    );
                }

                Task::none()
            }

            Message::SaveFinished(Ok(path)) => {
                self.status = format!("Saved to {}", path.display());
                ui::alert("Photo Crop", "Image saved!");
                Task::none()
            }

            Message::SaveFinished(Err(error)) => {
                eprintln!("⚠️  Save failed: {}", error);
                self.status = String::from("Failed to save image.");
                ui::alert("Photo Crop", "Failed to save image.");
                Task::none()
            }

            Message::Zoom(delta) => {
                self.editor.pinch(1.0 + delta);
                Task::none()
            }

            Message::Pan(delta) => {
                self.editor.pan(delta);
                Task::none()
            }

            Message::SettingsRowPressed => {
                ui::alert("Info", state::settings::AUTHOR);
                Task::none()
            }

            Message::SettingsToggled(index, value) => {
                self.settings.toggle(index, value);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content = match self.screen {
            Screen::Editor => ui::editor::view(&self.editor, self.display.as_ref(), &self.status),
            Screen::Settings => self.settings.view(),
        };

        column![
            container(content).width(Length::Fill).height(Length::Fill),
            self.tab_bar(),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The fixed two-item tab selector at the bottom of the window
    fn tab_bar(&self) -> Element<'_, Message> {
        let tab = |label: &'static str, screen: Screen| {
            let style = if self.screen == screen {
                button::primary
            } else {
                button::secondary
            };

            button(text(label).size(14))
                .style(style)
                .on_press(Message::ScreenSelected(screen))
                .padding(10)
        };

        container(
            row![
                tab("Crop Photo", Screen::Editor),
                tab("Settings", Screen::Settings),
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(10)
        .into()
    }

    /// Rebuild the canvas handle after the displayed image changed
    fn refresh_display(&mut self) {
        self.display = self.editor.displayed().map(DisplayImage::new);
    }
}

/// The crop viewport as a size, shared by the filter and save paths.
fn viewport_size() -> Size {
    Size::new(geometry::VIEWPORT_SIZE, geometry::VIEWPORT_SIZE)
}

fn main() -> iced::Result {
    iced::application("Photo Crop", PhotoCrop::update, PhotoCrop::view)
        .theme(PhotoCrop::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(PhotoCrop::new)
}
