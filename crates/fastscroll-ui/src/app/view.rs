use iced::widget::text::LineHeight;
use iced::widget::{
    canvas, column, container, horizontal_space, image, row, stack, text, text_editor, Space,
};
use iced::{Background, Border, Element, Length, Padding, Point, Rectangle, Size};

use super::{App, Message, STATUS_BAR_HEIGHT};
use crate::overlay::InputOverlay;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let editor_font = self.config.editor.font_size;
        let background = self.theme.background.primary.to_iced();
        let text_color = self.theme.foreground.primary.to_iced();
        let editor = text_editor(self.host.content())
            .on_action(Message::EditorAction)
            .size(editor_font)
            .line_height(LineHeight::Relative(self.config.editor.line_height))
            .padding(0)
            .height(Length::Fill)
            .style(move |theme, status| text_editor::Style {
                background: Background::Color(background),
                value: text_color,
                ..text_editor::default(theme, status)
            });

        let editor_area = stack![editor, row![horizontal_space(), self.view_scroller()]]
            .width(Length::Fill)
            .height(Length::Fill);

        column![editor_area, self.view_status_bar()].into()
    }

    // ========================================================================
    // Scroller strip
    // ========================================================================

    fn view_scroller(&self) -> Element<'_, Message> {
        let width = self.config.scroller.thumb_width as f32;
        let thumb_height = self.scroller.thumb_height() as f32;

        let painted = self
            .frame
            .and_then(|frame| self.images.get(frame.sprite).map(|handle| (frame, handle)));

        let (thumb_layer, thumb_bounds): (Element<'_, Message>, _) = match painted {
            Some((frame, handle)) => (
                column![
                    Space::with_height(Length::Fixed(frame.top)),
                    image(handle.clone())
                        .width(Length::Fixed(width))
                        .height(Length::Fixed(thumb_height))
                        .opacity(f32::from(frame.alpha) / 255.0),
                ]
                .into(),
                Some(Rectangle::new(
                    Point::new(0.0, frame.top),
                    Size::new(width, thumb_height),
                )),
            ),
            None => (Space::new(Length::Fill, Length::Fill).into(), None),
        };

        let input = canvas(InputOverlay::new(thumb_bounds))
            .width(Length::Fill)
            .height(Length::Fill);

        stack![thumb_layer, input]
            .width(Length::Fixed(width))
            .height(Length::Fill)
            .into()
    }

    // ========================================================================
    // Status bar
    // ========================================================================

    fn view_status_bar(&self) -> Element<'_, Message> {
        let theme = &self.theme;
        let tracker = self.host.tracker();
        let status = format!(
            "{:?} | thumb {:.0}px | alpha {} | line {}/{}",
            self.scroller.state(),
            self.scroller.thumb_top(),
            self.scroller.alpha(),
            tracker.first_line() + 1,
            tracker.line_count(),
        );

        let text_color = theme.foreground.muted.to_iced();
        let background = theme.ui.status_bar.to_iced();
        let border_color = theme.ui.border.to_iced();

        container(
            row![
                text(self.file_name.clone()).size(12).color(text_color),
                horizontal_space(),
                text(status).size(12).color(text_color),
            ]
            .padding(Padding::from([0, 10])),
        )
        .center_y(Length::Fixed(STATUS_BAR_HEIGHT))
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
    }
}
