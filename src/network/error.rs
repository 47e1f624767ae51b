/// Failures while loading weights or running the network.
#[derive(Debug)]
pub enum NetworkError {
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    Manifest(serde_json::Error),
    MissingVariable(String),
    ShapeMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    Forward(String),
    EmptyScores,
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
            Self::Manifest(e) => write!(f, "malformed checkpoint manifest: {}", e),
            Self::MissingVariable(name) => write!(f, "checkpoint has no variable {}", name),
            Self::ShapeMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "variable {} should hold {} values, found {}",
                name, expected, found
            ),
            Self::Forward(reason) => write!(f, "inference failed: {}", reason),
            Self::EmptyScores => write!(f, "network produced no class scores"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Manifest(e)
    }
}
