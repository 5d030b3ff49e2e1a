//! Storage errors.

use smallvec::CollectionAllocErr;
use thiserror::Error;

/// Failure to grow a limb buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity does not fit in `usize`.
    #[error("limb capacity overflow")]
    CapacityOverflow,

    /// The allocator refused the request.
    #[error("out of memory while allocating {bytes} bytes of limb storage")]
    OutOfMemory {
        /// Size of the refused allocation.
        bytes: usize,
    },
}

impl From<CollectionAllocErr> for AllocError {
    fn from(err: CollectionAllocErr) -> Self {
        match err {
            CollectionAllocErr::CapacityOverflow => Self::CapacityOverflow,
            CollectionAllocErr::AllocErr { layout } => Self::OutOfMemory {
                bytes: layout.size(),
            },
        }
    }
}
