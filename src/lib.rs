//! Fixed-capacity ring (round-robin) FIFO queue.
//!
//! [`RingQueue`] holds up to a fixed number of elements over a backing store
//! that never reallocates. Push, pop, peek, and the size queries are all
//! O(1); a full queue rejects pushes instead of evicting. The queue itself
//! does no locking, so concurrent callers must wrap it in their own
//! synchronization.

pub mod error;
pub mod queue;
pub mod utils;

pub use error::{RoundRobinError, RoundRobinResult};
pub use queue::RingQueue;
