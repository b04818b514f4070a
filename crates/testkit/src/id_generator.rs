use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use uuid::Uuid;

use crate::entity::TrackedEntity;
use crate::errors::Result;

/// Registry of entities created during a test session.
///
/// Shared between tests (wrap it in an `Arc`); every method takes `&self`.
#[derive(Debug)]
pub struct IdGenerator {
    default_scope: String,
    entities: Mutex<Vec<TrackedEntity>>,
}

impl IdGenerator {
    pub fn new(default_scope: impl Into<String>) -> Self {
        Self {
            default_scope: default_scope.into(),
            entities: Mutex::new(Vec::new()),
        }
    }

    pub fn default_scope(&self) -> &str {
        &self.default_scope
    }

    fn entities(&self) -> MutexGuard<'_, Vec<TrackedEntity>> {
        // A test that panicked mid-push leaves the list intact.
        self.entities.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn track(&self, entity: TrackedEntity) {
        debug!("Tracking {}", entity);
        self.entities().push(entity);
    }

    /// Records an entity by kind string.
    ///
    /// # Errors
    ///
    /// Returns [`TestkitError::MissingAnnotation`](crate::TestkitError::MissingAnnotation)
    /// when a property definition is recorded without its domain.
    pub fn add_scope_and_code(
        &self,
        kind: &str,
        scope: &str,
        code: &str,
        annotations: &[String],
    ) -> Result<()> {
        self.track(TrackedEntity::from_parts(kind, scope, code, annotations)?);
        Ok(())
    }

    /// Generates a unique code, records the entity and returns the record.
    ///
    /// The code is `code_prefix` followed by a v4 UUID. Without a `scope`
    /// the generator's default scope is used.
    pub fn generate_scope_and_code(
        &self,
        kind: &str,
        scope: Option<&str>,
        code_prefix: Option<&str>,
        annotations: &[String],
    ) -> Result<TrackedEntity> {
        let scope = scope.unwrap_or(self.default_scope.as_str());
        let code = format!("{}{}", code_prefix.unwrap_or_default(), Uuid::new_v4());

        let entity = TrackedEntity::from_parts(kind, scope, code, annotations)?;
        self.track(entity.clone());
        Ok(entity)
    }

    /// Drains every recorded entity in insertion order.
    pub fn pop_scope_and_codes(&self) -> Vec<TrackedEntity> {
        std::mem::take(&mut *self.entities())
    }

    pub fn len(&self) -> usize {
        self.entities().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities().is_empty()
    }
}
