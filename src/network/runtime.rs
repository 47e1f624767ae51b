use super::*;
use crate::Probability;

/// Tensor backend that executes the network.
///
/// Convolution, pooling and device memory all live behind this seam;
/// the game only needs these four operations. Tensors handed out by
/// the runtime are owned values, so dropping one releases whatever
/// device buffer backs it.
#[async_trait::async_trait]
pub trait Runtime: Send + Sync {
    /// Resolved weights, resident wherever the runtime computes.
    type Weights: Send + Sync;
    /// A device tensor.
    type Tensor: Send + Sync;

    /// Resolve a checkpoint into weights. Called once before inference.
    async fn load(&self, checkpoint: &Checkpoint) -> Result<Self::Weights, NetworkError>;
    /// Move a preprocessed input onto the device.
    fn upload(&self, input: Input) -> Result<Self::Tensor, NetworkError>;
    /// Run the SqueezeNet graph, producing one score per class.
    async fn forward(
        &self,
        weights: &Self::Weights,
        input: &Self::Tensor,
    ) -> Result<Self::Tensor, NetworkError>;
    /// Softmax the scores and return the `k` best (class index, probability).
    fn softmax_top_k(
        &self,
        scores: &Self::Tensor,
        k: usize,
    ) -> Result<Vec<(usize, Probability)>, NetworkError>;
}
