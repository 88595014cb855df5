mod error;
mod min_heap;

pub use error::{HeapError, Result};
pub use min_heap::MinHeap;
