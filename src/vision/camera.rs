use super::*;

/// Requested capture resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub width: usize,
    pub height: usize,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            width: crate::IMAGE_SIZE,
            height: crate::IMAGE_SIZE,
        }
    }
}

impl std::fmt::Display for Constraints {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A capture device that has to grant access before frames flow.
///
/// Implementations can wrap a browser media device, a V4L2 node,
/// a recorded clip, etc. Access is requested once at startup.
#[async_trait::async_trait]
pub trait Camera: Send {
    type Feed: Feed + 'static;

    /// Ask for access to the device. Resolves once the feed is playing.
    async fn request_access(&mut self, constraints: Constraints) -> Result<Self::Feed, CameraError>;
}

/// A granted, playing video stream.
pub trait Feed: Send + Sync {
    /// The current visual frame, or `None` while the stream is not ready.
    fn capture(&self) -> Option<Frame>;
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory camera and feed for tests.
    use super::*;
    use std::sync::Mutex;

    /// Feed that keeps returning the same frame, or nothing until one is set.
    #[derive(Debug, Default)]
    pub struct Still(Mutex<Option<Frame>>);

    impl Still {
        pub fn showing(frame: Frame) -> Self {
            Self(Mutex::new(Some(frame)))
        }
    }

    impl Feed for Still {
        fn capture(&self) -> Option<Frame> {
            self.0.lock().expect("feed lock").clone()
        }
    }

    /// Camera that either grants a still feed or fails with a fixed error.
    pub struct Webcam(pub Result<Frame, CameraError>);

    #[async_trait::async_trait]
    impl Camera for Webcam {
        type Feed = Still;
        async fn request_access(&mut self, _: Constraints) -> Result<Still, CameraError> {
            self.0.clone().map(Still::showing)
        }
    }
}
