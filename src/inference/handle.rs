use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owner's grip on a running prediction loop.
///
/// `stop` cancels and waits: once it returns, the loop has exited and
/// will never invoke its callback again. Dropping the handle cancels
/// without waiting.
#[derive(Debug)]
pub struct Handle {
    token: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl Handle {
    pub(crate) fn new(token: watch::Sender<bool>, task: JoinHandle<()>) -> Self {
        Self {
            token,
            task: Some(task),
        }
    }
    /// Fresh cancellation token: the sender stays with the handle,
    /// the receiver goes to the loop.
    pub(crate) fn token() -> (watch::Sender<bool>, watch::Receiver<bool>) {
        watch::channel(false)
    }
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
    pub async fn stop(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::warn!("prediction loop ended abnormally: {}", e);
            }
        }
        log::debug!("[inference] loop stopped");
    }
    fn cancel(&self) {
        self.token.send_replace(true);
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
