use crate::CHANNELS;
use crate::IMAGE_SIZE;
use crate::IMAGENET_MEAN;
use crate::vision::Frame;

/// Preprocessed network input: an `IMAGE_SIZE` x `IMAGE_SIZE` x 3 tensor,
/// row-major, mean-centred.
///
/// Frames of any size are resampled with nearest-neighbour lookup.
/// Channel c of every pixel has `IMAGENET_MEAN[c]` subtracted from its
/// 0..255 value, in the same channel order the weights were trained with.
#[derive(Debug, Clone, PartialEq)]
pub struct Input(Vec<f32>);

impl Input {
    pub const SHAPE: [usize; 3] = [IMAGE_SIZE, IMAGE_SIZE, CHANNELS];

    pub fn shape(&self) -> [usize; 3] {
        Self::SHAPE
    }
    pub fn values(&self) -> &[f32] {
        &self.0
    }
    pub fn into_values(self) -> Vec<f32> {
        self.0
    }
}

impl From<Frame> for Input {
    fn from(frame: Frame) -> Self {
        let w = frame.width();
        let h = frame.height();
        Self(
            (0..IMAGE_SIZE)
                .map(|row| row * h / IMAGE_SIZE)
                .flat_map(|y| {
                    (0..IMAGE_SIZE)
                        .map(move |col| col * w / IMAGE_SIZE)
                        .map(move |x| (x, y))
                })
                .flat_map(|(x, y)| {
                    frame
                        .rgb(x, y)
                        .into_iter()
                        .zip(IMAGENET_MEAN)
                        .map(|(value, mean)| value as f32 - mean)
                        .collect::<Vec<_>>()
                })
                .collect(),
        )
    }
}
