use thiserror::Error;

use crate::union_find::Vertex;

/// Precondition violations of the [`crate::UnionFind`] API.
///
/// The panicking methods fail with this error's message; the `try_*` methods return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("invalid vertex: {vertex} (size: {size})")]
    InvalidVertex { vertex: Vertex, size: usize },

    #[error("rewind called on a union-find built without recording")]
    RecordingDisabled,
}
