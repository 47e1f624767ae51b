use super::*;
use crate::Probability;
use crate::gesture::Gesture;
use crate::vision::Frame;

/// A runtime paired with weights it has finished loading.
///
/// There is no way to build one before the checkpoint resolves,
/// so nothing can classify against a half-loaded model.
pub struct Network<R: Runtime> {
    runtime: R,
    weights: R::Weights,
}

impl<R: Runtime> Network<R> {
    pub async fn load(runtime: R, checkpoint: &Checkpoint) -> Result<Self, NetworkError> {
        let weights = runtime.load(checkpoint).await?;
        log::info!("{:<32}{:<32}", "network ready", checkpoint);
        Ok(Self { runtime, weights })
    }
    pub fn runtime(&self) -> &R {
        &self.runtime
    }
    /// Most likely gesture for a frame.
    pub async fn classify(&self, frame: Frame) -> Result<Gesture, NetworkError> {
        self.rank(frame, 1)
            .await?
            .first()
            .map(|(gesture, _)| *gesture)
            .ok_or(NetworkError::EmptyScores)
    }
    /// The `k` most likely gestures with their probabilities.
    /// Every tensor allocated here is dropped before returning.
    pub async fn rank(
        &self,
        frame: Frame,
        k: usize,
    ) -> Result<Vec<(Gesture, Probability)>, NetworkError> {
        let input = self.runtime.upload(Input::from(frame))?;
        let scores = self.runtime.forward(&self.weights, &input).await?;
        let top = self.runtime.softmax_top_k(&scores, k)?;
        top.into_iter()
            .map(|(i, p)| {
                Gesture::category(i)
                    .map(|g| (g, p))
                    .ok_or_else(|| NetworkError::Forward(format!("class index {} out of range", i)))
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Deterministic in-memory runtime for exercising the inference path.
    use super::*;
    use crate::Score;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    /// Counts live tensors so tests can assert nothing outlives a call.
    pub struct Tensor {
        scores: Vec<Score>,
        live: Arc<AtomicUsize>,
    }

    impl Drop for Tensor {
        fn drop(&mut self) {
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Scores a frame by its top-left pixel: the red channel selects the class.
    #[derive(Clone, Default)]
    pub struct Fake {
        pub live: Arc<AtomicUsize>,
        pub inflight: Arc<AtomicUsize>,
        pub peak: Arc<AtomicUsize>,
        pub calls: Arc<AtomicUsize>,
        pub journal: Arc<Mutex<Vec<&'static str>>>,
        pub latency: std::time::Duration,
        pub failing: bool,
    }

    impl Fake {
        pub fn slow(latency: std::time::Duration) -> Self {
            Self {
                latency,
                ..Self::default()
            }
        }
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }
        pub fn live(&self) -> usize {
            self.live.load(Ordering::SeqCst)
        }
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
        pub fn peak(&self) -> usize {
            self.peak.load(Ordering::SeqCst)
        }
        pub fn journal(&self) -> Vec<&'static str> {
            self.journal.lock().expect("journal lock").clone()
        }
        pub fn note(&self, entry: &'static str) {
            self.journal.lock().expect("journal lock").push(entry);
        }
        fn tensor(&self, scores: Vec<Score>) -> Tensor {
            self.live.fetch_add(1, Ordering::SeqCst);
            Tensor {
                scores,
                live: self.live.clone(),
            }
        }
    }

    /// Frame whose classification is `gesture`.
    pub fn frame(gesture: Gesture) -> Frame {
        let index = Gesture::CATEGORIES
            .iter()
            .position(|g| *g == gesture)
            .expect("every gesture has a category");
        Frame::solid(4, 4, [index as u8, 0, 0]).expect("non-empty frame")
    }

    #[async_trait::async_trait]
    impl Runtime for Fake {
        type Weights = ();
        type Tensor = Tensor;

        async fn load(&self, _: &Checkpoint) -> Result<Self::Weights, NetworkError> {
            Ok(())
        }
        fn upload(&self, input: Input) -> Result<Self::Tensor, NetworkError> {
            Ok(self.tensor(input.into_values()))
        }
        async fn forward(&self, _: &(), input: &Tensor) -> Result<Tensor, NetworkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.inflight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            self.note("forward");
            let hidden = self.tensor(vec![0.; 8]);
            tokio::time::sleep(self.latency).await;
            self.inflight.fetch_sub(1, Ordering::SeqCst);
            drop(hidden);
            if self.failing {
                return Err(NetworkError::Forward("device lost".to_string()));
            }
            let class = (input.scores[0] + crate::IMAGENET_MEAN[0]).round() as usize;
            let mut scores = vec![0.; Gesture::CATEGORIES.len()];
            let last = scores.len() - 1;
            scores[class.min(last)] = 10.;
            Ok(self.tensor(scores))
        }
        fn softmax_top_k(
            &self,
            scores: &Tensor,
            k: usize,
        ) -> Result<Vec<(usize, Probability)>, NetworkError> {
            let probabilities = self.tensor(softmax(&scores.scores));
            Ok(top_k(&probabilities.scores, k))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::*;
    use super::*;

    async fn network(runtime: Fake) -> Network<Fake> {
        Network::load(runtime, &Checkpoint::new("unused"))
            .await
            .expect("fake load")
    }

    #[tokio::test]
    async fn classifies_every_gesture() {
        let network = network(Fake::default()).await;
        for gesture in Gesture::ALL {
            assert_eq!(network.classify(frame(gesture)).await.expect("classify"), gesture);
        }
    }

    #[tokio::test]
    async fn ranks_by_probability() {
        let network = network(Fake::default()).await;
        let ranked = network.rank(frame(Gesture::Spock), 3).await.expect("rank");
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0, Gesture::Spock);
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[tokio::test]
    async fn releases_tensors_after_success() {
        let runtime = Fake::default();
        let network = network(runtime.clone()).await;
        network.classify(frame(Gesture::Rock)).await.expect("classify");
        assert_eq!(runtime.live(), 0);
    }

    #[tokio::test]
    async fn releases_tensors_after_failure() {
        let runtime = Fake::failing();
        let network = network(runtime.clone()).await;
        assert!(network.classify(frame(Gesture::Rock)).await.is_err());
        assert_eq!(runtime.live(), 0);
    }
}
