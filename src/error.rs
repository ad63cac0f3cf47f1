// error.rs
use crate::landmark::Landmark;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("asset '{0}' is not embedded")]
    MissingAsset(String),

    #[error("parse error in {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode export: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown landmark '{0}'")]
    UnknownLandmark(String),

    #[error("landmark '{0}' has no default position")]
    MissingLandmark(Landmark),

    #[error("landmark '{child}' has two parents: '{first}' and '{second}'")]
    DuplicateParent {
        child: Landmark,
        first: Landmark,
        second: Landmark,
    },

    #[error("hierarchy contains a cycle through '{0}'")]
    Cycle(Landmark),

    #[error("max reach for '{0}' must be finite and non-negative, got {1}")]
    InvalidReach(Landmark, f32),
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
