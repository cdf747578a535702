use iced::widget::canvas::{self, Program};
use iced::mouse::{self, Cursor};
use iced::widget::image::Handle;
use iced::{touch, Color, Point, Rectangle, Renderer, Size, Theme};

use crate::geometry::{self, VIEWPORT_SIZE};
use crate::state::ViewTransform;
use crate::Message;

/// Border of the crop viewport (the system-green frame of the original
/// mockups).
const VIEWPORT_BORDER: Color = Color::from_rgb(0.20, 0.78, 0.35);
const VIEWPORT_BORDER_WIDTH: f32 = 2.0;

/// Background behind the image while nothing covers the viewport.
const VIEWPORT_FILL: Color = Color::from_rgb(0.11, 0.11, 0.13);

/// An image prepared for the canvas: the GPU handle plus the natural
/// pixel size the layout math needs.
#[derive(Debug, Clone)]
pub struct DisplayImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl DisplayImage {
    pub fn new(image: &image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        Self {
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
        }
    }
}

/// The editor's display surface: renders the current image aspect-fit
/// under the square viewport and turns wheel/drag (and touch) input into
/// zoom and pan messages.
pub struct EditorCanvas {
    pub image: Option<DisplayImage>,
    pub transform: ViewTransform,
}

impl EditorCanvas {
    /// The viewport square, centered in the canvas.
    fn viewport(bounds: Size) -> Rectangle {
        Rectangle::new(
            Point::new(
                (bounds.width - VIEWPORT_SIZE) / 2.0,
                (bounds.height - VIEWPORT_SIZE) / 2.0,
            ),
            Size::new(VIEWPORT_SIZE, VIEWPORT_SIZE),
        )
    }

    /// Where the image lands on the canvas: the display surface centered
    /// on the viewport, scaled and shifted by the view transform, with
    /// the image aspect-fit inside it.
    fn content_rect(&self, viewport: Rectangle) -> Option<Rectangle> {
        let image = self.image.as_ref()?;

        let display = geometry::display_bounds(image.width, image.height, viewport.size());
        let scaled = Size::new(
            display.width * self.transform.scale,
            display.height * self.transform.scale,
        );
        let center = Point::new(
            viewport.center_x() + self.transform.offset.x,
            viewport.center_y() + self.transform.offset.y,
        );
        let surface = Rectangle::new(
            Point::new(center.x - scaled.width / 2.0, center.y - scaled.height / 2.0),
            scaled,
        );

        Some(geometry::aspect_fit(image.width, image.height, surface))
    }
}

impl Program<Message> for EditorCanvas {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if self.image.is_none() {
            return (canvas::event::Status::Ignored, None);
        }

        match event {
            // Mouse wheel for zooming
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    let zoom_delta = match delta {
                        mouse::ScrollDelta::Lines { y, .. } => y * 0.1,
                        mouse::ScrollDelta::Pixels { y, .. } => y * 0.01,
                    };
                    return (canvas::event::Status::Captured, Some(Message::Zoom(zoom_delta)));
                }
            }

            // Mouse button press - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.begin(position);
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse button release - stop dragging
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    state.end();
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse move - pan if dragging
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    if let Some(position) = cursor.position() {
                        if let Some(message) = state.drag_to(position) {
                            return (canvas::event::Status::Captured, Some(message));
                        }
                    }
                }
            }

            // Touch input mirrors the mouse drag
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(position) {
                    state.begin(position);
                    return (canvas::event::Status::Captured, None);
                }
            }

            canvas::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if state.is_dragging {
                    if let Some(message) = state.drag_to(position) {
                        return (canvas::event::Status::Captured, Some(message));
                    }
                }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { .. })
            | canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.is_dragging {
                    state.end();
                    return (canvas::event::Status::Captured, None);
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let viewport = Self::viewport(bounds.size());

        frame.fill_rectangle(viewport.position(), viewport.size(), VIEWPORT_FILL);

        if let (Some(image), Some(content)) =
            (self.image.as_ref(), self.content_rect(viewport))
        {
            let handle = image.handle.clone();
            // Everything outside the viewport square is clipped away.
            frame.with_clip(viewport, |frame| {
                let local = Rectangle::new(
                    Point::new(content.x - viewport.x, content.y - viewport.y),
                    content.size(),
                );
                frame.draw_image(local, canvas::Image::new(handle));
            });
        }

        frame.stroke(
            &canvas::Path::rectangle(viewport.position(), viewport.size()),
            canvas::Stroke::default()
                .with_color(VIEWPORT_BORDER)
                .with_width(VIEWPORT_BORDER_WIDTH),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if self.image.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_position: Option<Point>,
}

impl DragState {
    fn begin(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    fn end(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }

    /// Advance the drag and emit the pan delta, in canvas points.
    fn drag_to(&mut self, position: Point) -> Option<Message> {
        let last = self.last_position?;
        self.last_position = Some(position);

        let delta = cgmath::Vector2::new(position.x - last.x, position.y - last.y);
        Some(Message::Pan(delta))
    }
}
