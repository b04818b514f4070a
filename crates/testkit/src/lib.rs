//! LUSID testkit - bookkeeping for entities created by test runs.
//!
//! Tests record what they create in an [`IdGenerator`]; at the end of the
//! session [`delete_entities`] removes each record through the matching
//! delete endpoint. [`TestSession`] bundles the two.
//!
//! ```rust,ignore
//! let session = TestSession::new(client, "sdk-tests");
//! let portfolio = session.ids().generate_scope_and_code("portfolio", None, Some("p-"), &[])?;
//! // ... create the portfolio and exercise it ...
//! session.teardown().await;
//! ```

mod cleanup;
mod entity;
mod errors;
mod id_generator;
mod session;

#[cfg(test)]
mod cleanup_tests;

pub use cleanup::{delete_entities, CleanupApis, CleanupReport};
pub use entity::TrackedEntity;
pub use errors::{Result, TestkitError};
pub use id_generator::IdGenerator;
pub use session::TestSession;
