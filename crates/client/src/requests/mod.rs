//! Request execution patterns.
//!
//! - [`AsyncResult`]: one request per handle, running on the runtime's worker
//!   pool, observable through a non-blocking poll, a bounded wait and a
//!   cancellation handle.
//! - [`gather`], [`gather_unordered`] and [`wait_all`]: issue many requests
//!   and wait for all of them together.
//!
//! Neither pattern retries, rate limits or applies backpressure.

mod async_result;
mod gather;

pub use async_result::{AsyncResult, CancelHandle, WaitResult};
pub use gather::{gather, gather_unordered, wait_all};
