/// Reasons camera access can fail. Both are terminal for the session:
/// they are shown to the player and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    PermissionDenied,
    NoDeviceFound,
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "camera permission denied"),
            Self::NoDeviceFound => write!(f, "no camera found"),
        }
    }
}

impl std::error::Error for CameraError {}
