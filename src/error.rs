use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek` or `poll` was called while the heap held no elements.
    #[error("heap is empty")]
    Empty,
}

pub type Result<T, E = HeapError> = std::result::Result<T, E>;
