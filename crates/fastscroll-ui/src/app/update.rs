use iced::Task;

use super::{App, Message, STATUS_BAR_HEIGHT};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                self.host.perform(action);
            }

            Message::Overlay(event) => {
                let handled = self.scroller.on_touch(&mut self.host, event);
                tracing::trace!("Overlay {:?} handled: {}", event, handled);
            }

            Message::OverlayResized(size) => {
                self.scroller.set_bounds(size.width, size.height);
            }

            Message::TimerFired(token) => {
                self.scroller.on_timer(token);
            }

            Message::WindowResized(size) => {
                let viewport = (size.height - STATUS_BAR_HEIGHT).max(0.0);
                self.host.set_viewport_height(viewport);
                let (width, _) = self.scroller.bounds();
                self.scroller.set_bounds(width, viewport);
            }

            Message::FlingTick(_) => {
                self.host.tick_fling();
            }
        }

        self.sync_scroller()
    }

    /// Delivers scroll notifications, runs a pending draw pass and arms the
    /// timers the scroller scheduled.
    fn sync_scroller(&mut self) -> Task<Message> {
        for (id, change) in self.host.drain_scroll_changes() {
            if id == self.scroller.id() {
                self.scroller.on_scroll_changed(&self.host, change);
            }
        }

        if self.scroller.needs_redraw() {
            self.frame = self.scroller.draw();
            self.images.sync(self.scroller.sprites());
        }

        let timers = self
            .scroller
            .take_timer_requests()
            .into_iter()
            .map(|request| {
                Task::perform(
                    async move {
                        tokio::time::sleep(request.delay).await;
                        request.token
                    },
                    Message::TimerFired,
                )
            });

        Task::batch(timers)
    }
}
