use super::Handle;
use crate::gesture::Gesture;
use crate::network::Network;
use crate::network::NetworkError;
use crate::network::Runtime;
use crate::vision::Feed;
use tokio::sync::watch;

/// Couples a playing feed with a loaded network.
///
/// Each prediction captures one frame, classifies it and reports the
/// gesture. The loop form runs predictions back to back with a fixed
/// pause in between, never two at once.
pub struct Classifier<R, F>
where
    R: Runtime,
    F: Feed,
{
    network: Network<R>,
    feed: F,
}

impl<R, F> Classifier<R, F>
where
    R: Runtime + 'static,
    F: Feed + 'static,
{
    pub fn new(network: Network<R>, feed: F) -> Self {
        Self { network, feed }
    }

    /// Capture, classify and report a single frame.
    ///
    /// A feed that is not ready yet makes this a no-op. Returns the
    /// reported gesture, if any.
    pub async fn predict_once<C>(&self, on_predict: &mut C) -> Result<Option<Gesture>, NetworkError>
    where
        C: FnMut(Gesture),
    {
        match self.feed.capture() {
            None => {
                log::trace!("[inference] feed not ready, skipping frame");
                Ok(None)
            }
            Some(frame) => {
                let gesture = self.network.classify(frame).await?;
                log::trace!("[inference] predicted {}", gesture);
                on_predict(gesture);
                Ok(Some(gesture))
            }
        }
    }

    /// Spawn the prediction loop with the default spacing.
    pub fn start<C>(self, on_predict: C) -> Handle
    where
        C: FnMut(Gesture) + Send + 'static,
    {
        self.start_with(crate::PREDICTION_INTERVAL, on_predict)
    }

    /// Spawn the prediction loop, pausing `interval` after every prediction.
    pub fn start_with<C>(self, interval: std::time::Duration, on_predict: C) -> Handle
    where
        C: FnMut(Gesture) + Send + 'static,
    {
        let (token, cancel) = Handle::token();
        let task = tokio::spawn(self.run(interval, cancel, on_predict));
        log::debug!("[inference] loop started ({:?} spacing)", interval);
        Handle::new(token, task)
    }

    async fn run<C>(
        self,
        interval: std::time::Duration,
        mut cancel: watch::Receiver<bool>,
        mut on_predict: C,
    ) where
        C: FnMut(Gesture) + Send + 'static,
    {
        let ref latch = cancel.clone();
        let ref mut report = |gesture| {
            if !*latch.borrow() {
                on_predict(gesture)
            }
        };
        loop {
            if *cancel.borrow() {
                break;
            }
            tokio::select! {
                biased;
                _ = cancel.changed() => break,
                result = self.predict_once(report) => if let Err(e) = result {
                    log::warn!("[inference] prediction failed: {}", e);
                },
            }
            tokio::select! {
                biased;
                _ = cancel.changed() => break,
                _ = tokio::time::sleep(interval) => continue,
            }
        }
    }
}
