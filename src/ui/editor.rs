/// Editor screen layout: viewport canvas, load/save actions, filter
/// selector, status line.

use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, radio, row, text};
use iced::{Alignment, Element, Length};

use crate::filters::Filter;
use crate::state::EditorState;
use crate::Message;

use super::canvas::{DisplayImage, EditorCanvas};

/// The canvas leaves a small margin around the 300pt viewport.
const CANVAS_SIZE: f32 = 340.0;

pub fn view<'a>(
    editor: &EditorState,
    display: Option<&DisplayImage>,
    status: &'a str,
) -> Element<'a, Message> {
    let surface = Canvas::new(EditorCanvas {
        image: display.cloned(),
        transform: editor.transform(),
    })
    .width(Length::Fixed(CANVAS_SIZE))
    .height(Length::Fixed(CANVAS_SIZE));

    let actions = row![
        button("Load Image").on_press(Message::LoadImage).padding(10),
        button("Save")
            .on_press_maybe(editor.has_image().then_some(Message::SaveImage))
            .padding(10),
    ]
    .spacing(20);

    let mut selector = row![].spacing(15);
    for filter in Filter::ALL {
        selector = selector.push(radio(
            filter.label(),
            filter,
            Some(editor.filter()),
            Message::FilterSelected,
        ));
    }

    let content = column![surface, actions, selector, text(status).size(14)]
        .spacing(20)
        .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
