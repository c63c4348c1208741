use fastscroll_core::{Config, FastScroller, ThumbFrame};
use iced::{Size, Subscription, Task, window};

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

use crate::host::EditorHost;
use crate::overlay::ThumbImages;
use crate::theme::Theme;

/// Initial window size.
pub const WINDOW_SIZE: Size = Size::new(1024.0, 720.0);
/// Height of the status bar under the editor.
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Launch options resolved by the binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Display name of the opened file
    pub file_name: Option<String>,
    /// Initial editor text; a generated sample when absent
    pub text: Option<String>,
    pub config: Config,
    pub theme: Theme,
}

pub struct App {
    pub host: EditorHost,
    pub scroller: FastScroller,
    pub frame: Option<ThumbFrame>,
    pub images: ThumbImages,
    pub theme: Theme,
    pub config: Config,
    pub file_name: String,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            file_name,
            text,
            config,
            theme,
        } = flags;

        let text = text.unwrap_or_else(sample_text);
        let viewport = WINDOW_SIZE.height - STATUS_BAR_HEIGHT;

        let mut host = EditorHost::new(&text, config.editor.line_height_px());
        host.set_viewport_height(viewport);

        let mut scroller =
            FastScroller::new(config.scroller.clone(), theme.foreground.accent.to_rgba());
        scroller.set_bounds(config.scroller.thumb_width as f32, viewport);
        scroller.link(Some(&mut host));

        let app = Self {
            host,
            scroller,
            frame: None,
            images: ThumbImages::default(),
            theme,
            config,
            file_name: file_name.unwrap_or_else(|| "untitled".to_string()),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("{} - Fastscroll", self.file_name)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.host.is_flinging() {
            Subscription::batch([resize, window::frames().map(Message::FlingTick)])
        } else {
            resize
        }
    }
}

/// Numbered filler lines so the scroller has something to scroll.
fn sample_text() -> String {
    let mut text = String::from("// Drag the thumb on the right edge to jump through the file.\n");
    for i in 1..=2000 {
        text.push_str(&format!("line {:>4}: the quick brown fox jumps over the lazy dog\n", i));
    }
    text
}

pub fn run(flags: Flags) -> iced::Result {
    let theme = flags.theme.iced_theme();
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(WINDOW_SIZE)
        .theme(move |_| theme.clone())
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
