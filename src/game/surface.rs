use super::Event;
use tokio::sync::mpsc::UnboundedSender;

/// Whatever renders the game: a browser view, a terminal, a test probe.
/// Notified of every transition; never drives the game itself.
#[async_trait::async_trait]
pub trait Surface: Send {
    async fn notify(&mut self, event: &Event);
}

/// Forwards events to a channel, for surfaces living on another task.
#[async_trait::async_trait]
impl Surface for UnboundedSender<Event> {
    async fn notify(&mut self, event: &Event) {
        if let Err(e) = self.send(*event) {
            log::warn!("[surface] dropped {}: receiver gone", e.0);
        }
    }
}
