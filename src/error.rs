use crate::network::NetworkError;
use crate::vision::CameraError;

/// Anything that stops a session from starting.
#[derive(Debug)]
pub enum Error {
    Camera(CameraError),
    Network(NetworkError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camera(e) => write!(f, "camera unavailable: {}", e),
            Self::Network(e) => write!(f, "network unavailable: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Camera(e) => Some(e),
            Self::Network(e) => Some(e),
        }
    }
}

impl From<CameraError> for Error {
    fn from(e: CameraError) -> Self {
        Self::Camera(e)
    }
}

impl From<NetworkError> for Error {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}
