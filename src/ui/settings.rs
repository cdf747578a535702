/// Settings screen: a static list of rows, each rendered per its variant.
/// Tapping a row opens the informational dialog; the switch row flips an
/// in-memory flag that nothing persists.

use iced::widget::{column, container, horizontal_space, mouse_area, row, text, toggler};
use iced::{Alignment, Element, Length};

use crate::state::settings::{RowKind, SettingsRow};
use crate::Message;

pub struct SettingsScreen {
    rows: Vec<SettingsRow>,
    switches: Vec<bool>,
}

impl SettingsScreen {
    pub fn new(rows: Vec<SettingsRow>) -> Self {
        // Switch rows start on, matching the always-dark theme.
        let switches = rows.iter().map(|row| row.kind == RowKind::TitleSwitch).collect();

        Self { rows, switches }
    }

    pub fn toggle(&mut self, index: usize, value: bool) {
        if let Some(slot) = self.switches.get_mut(index) {
            *slot = value;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut list = column![].spacing(8).padding(16);
        for (index, descriptor) in self.rows.iter().enumerate() {
            list = list.push(self.row_view(index, descriptor));
        }

        container(list).width(Length::Fill).into()
    }

    fn row_view<'a>(&'a self, index: usize, descriptor: &'a SettingsRow) -> Element<'a, Message> {
        let content: Element<'a, Message> = match descriptor.kind {
            RowKind::Title => text(&descriptor.title).into(),
            RowKind::TitleSubtitle => column![
                text(&descriptor.title),
                text(descriptor.subtitle.as_deref().unwrap_or_default())
                    .size(12)
                    .style(text::secondary),
            ]
            .spacing(2)
            .into(),
            RowKind::TitleSwitch => row![
                text(&descriptor.title),
                horizontal_space(),
                toggler(self.switches.get(index).copied().unwrap_or_default())
                    .on_toggle(move |value| Message::SettingsToggled(index, value))
                    .width(Length::Shrink),
            ]
            .align_y(Alignment::Center)
            .into(),
        };

        mouse_area(
            container(content)
                .padding(12)
                .width(Length::Fill)
                .style(container::bordered_box),
        )
        .on_press(Message::SettingsRowPressed)
        .into()
    }
}
