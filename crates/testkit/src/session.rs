use std::sync::Arc;

use log::info;

use crate::cleanup::{delete_entities, CleanupApis, CleanupReport};
use crate::id_generator::IdGenerator;

/// A client paired with the registry of what its tests create.
///
/// Call [`teardown`](Self::teardown) once the tests are done. Dropping the
/// session without it leaves the recorded entities in place.
#[derive(Debug)]
pub struct TestSession<A> {
    api: A,
    ids: Arc<IdGenerator>,
}

impl<A: CleanupApis> TestSession<A> {
    pub fn new(api: A, default_scope: impl Into<String>) -> Self {
        Self {
            api,
            ids: Arc::new(IdGenerator::new(default_scope)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Registry handle for tests running on other tasks.
    pub fn shared_ids(&self) -> Arc<IdGenerator> {
        Arc::clone(&self.ids)
    }

    /// Deletes everything recorded during the session.
    pub async fn teardown(self) -> CleanupReport {
        let report = delete_entities(&self.ids, &self.api).await;
        info!(
            "Session cleanup: {} deleted, {} failed, {} skipped",
            report.deleted.len(),
            report.failed.len(),
            report.skipped.len()
        );
        report
    }
}
