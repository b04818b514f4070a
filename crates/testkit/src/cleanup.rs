use log::{error, info, warn};
use lusid_client::{
    ConfigurationRecipeApi, CorporateActionSourcesApi, CutLabelDefinitionsApi, OrdersApi,
    PortfoliosApi, PropertyDefinitionsApi, Result as ClientResult,
};
use lusid_models::DeletedEntityResponse;

use crate::entity::TrackedEntity;
use crate::id_generator::IdGenerator;

/// The delete operations cleanup dispatches to.
pub trait CleanupApis:
    PortfoliosApi
    + PropertyDefinitionsApi
    + CutLabelDefinitionsApi
    + OrdersApi
    + ConfigurationRecipeApi
    + CorporateActionSourcesApi
{
}

impl<T> CleanupApis for T where
    T: PortfoliosApi
        + PropertyDefinitionsApi
        + CutLabelDefinitionsApi
        + OrdersApi
        + ConfigurationRecipeApi
        + CorporateActionSourcesApi
{
}

/// Outcome of a cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub deleted: Vec<TrackedEntity>,
    pub failed: Vec<TrackedEntity>,
    /// Entities of a kind nothing could delete.
    pub skipped: Vec<TrackedEntity>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Deletes every entity recorded in `ids`.
///
/// Deletions run one at a time in the order the entities were recorded.
/// A failed deletion is logged and the pass moves on; nothing is retried.
pub async fn delete_entities<A>(ids: &IdGenerator, api: &A) -> CleanupReport
where
    A: CleanupApis + ?Sized,
{
    let mut report = CleanupReport::default();

    for entity in ids.pop_scope_and_codes() {
        let outcome = match delete_one(api, &entity).await {
            Some(outcome) => outcome,
            None => {
                warn!("No delete operation for {}; skipping", entity);
                report.skipped.push(entity);
                continue;
            }
        };

        match outcome {
            Ok(_) => {
                info!("Deleted {}", entity);
                report.deleted.push(entity);
            }
            Err(e) => {
                error!("Failed to delete {}: {}", entity, e);
                report.failed.push(entity);
            }
        }
    }

    report
}

/// `None` for entities no endpoint can delete.
async fn delete_one<A>(
    api: &A,
    entity: &TrackedEntity,
) -> Option<ClientResult<DeletedEntityResponse>>
where
    A: CleanupApis + ?Sized,
{
    let outcome = match entity {
        TrackedEntity::PropertyDefinition {
            domain,
            scope,
            code,
        } => api.delete_property_definition(domain, scope, code).await,
        TrackedEntity::Portfolio { scope, code } => api.delete_portfolio(scope, code).await,
        TrackedEntity::CutLabel { code, .. } => api.delete_cut_label_definition(code).await,
        TrackedEntity::Order { scope, code } => api.delete_order(scope, code).await,
        TrackedEntity::Recipe { scope, code } => {
            api.delete_configuration_recipe(scope, code).await
        }
        TrackedEntity::CorporateActionSource { scope, code } => {
            api.delete_corporate_action_source(scope, code).await
        }
        TrackedEntity::Unrecognised { .. } => return None,
    };
    Some(outcome)
}
