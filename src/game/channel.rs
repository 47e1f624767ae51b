use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Coupled sender/receiver pair, so a task can hand out senders for
/// timers it spawns while keeping the receiving end to itself.
#[derive(Debug)]
pub struct Channel<T> {
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn tx(&self) -> UnboundedSender<T> {
        self.tx.clone()
    }
    pub fn rx(&mut self) -> &mut UnboundedReceiver<T> {
        &mut self.rx
    }
}
