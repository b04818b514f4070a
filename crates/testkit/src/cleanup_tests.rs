use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use log::{Level, LevelFilter, Metadata, Record};
use lusid_client::{
    ClientError, ConfigurationRecipeApi, CorporateActionSourcesApi, CutLabelDefinitionsApi,
    OrdersApi, PortfoliosApi, PropertyDefinitionsApi, Result,
};
use lusid_models::{
    CreatePropertyDefinitionRequest, CutLabelDefinition, DeletedEntityResponse,
    PropertyDefinition,
};

use crate::{delete_entities, IdGenerator, TestSession, TrackedEntity};

// --- Logger capturing every record for assertions ---
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};
static LOGGER_INIT: Once = Once::new();

/// Records logged so far whose message mentions `needle`.
///
/// Tests share one process-wide logger, so filter on something unique to
/// the test.
fn logged_mentioning(needle: &str) -> Vec<(Level, String)> {
    LOGGER.records
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, message)| message.contains(needle))
        .cloned()
        .collect()
}

fn capture_logs() {
    LOGGER_INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

// --- Mock API recording every delete call ---
#[derive(Clone, Default)]
struct MockDeleteApi {
    calls: Arc<Mutex<Vec<String>>>,
    fail_codes: Arc<Mutex<Vec<String>>>,
}

impl MockDeleteApi {
    fn fail_on(&self, code: &str) {
        self.fail_codes.lock().unwrap().push(code.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String, code: &str) -> Result<DeletedEntityResponse> {
        self.calls.lock().unwrap().push(call);
        if self.fail_codes.lock().unwrap().iter().any(|c| c == code) {
            return Err(ClientError::api(404, format!("{} not found", code)));
        }
        Ok(DeletedEntityResponse::default())
    }
}

#[async_trait]
impl PortfoliosApi for MockDeleteApi {
    async fn delete_portfolio(&self, scope: &str, code: &str) -> Result<DeletedEntityResponse> {
        self.record(format!("delete_portfolio {} {}", scope, code), code)
    }
}

#[async_trait]
impl PropertyDefinitionsApi for MockDeleteApi {
    async fn create_property_definition(
        &self,
        _request: &CreatePropertyDefinitionRequest,
    ) -> Result<PropertyDefinition> {
        unimplemented!()
    }

    async fn delete_property_definition(
        &self,
        domain: &str,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse> {
        self.record(
            format!("delete_property_definition {} {} {}", domain, scope, code),
            code,
        )
    }
}

#[async_trait]
impl CutLabelDefinitionsApi for MockDeleteApi {
    async fn create_cut_label_definition(
        &self,
        _request: &CutLabelDefinition,
    ) -> Result<CutLabelDefinition> {
        unimplemented!()
    }

    async fn delete_cut_label_definition(&self, code: &str) -> Result<DeletedEntityResponse> {
        self.record(format!("delete_cut_label_definition {}", code), code)
    }
}

#[async_trait]
impl OrdersApi for MockDeleteApi {
    async fn delete_order(&self, scope: &str, code: &str) -> Result<DeletedEntityResponse> {
        self.record(format!("delete_order {} {}", scope, code), code)
    }
}

#[async_trait]
impl ConfigurationRecipeApi for MockDeleteApi {
    async fn delete_configuration_recipe(
        &self,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse> {
        self.record(format!("delete_configuration_recipe {} {}", scope, code), code)
    }
}

#[async_trait]
impl CorporateActionSourcesApi for MockDeleteApi {
    async fn delete_corporate_action_source(
        &self,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse> {
        self.record(
            format!("delete_corporate_action_source {} {}", scope, code),
            code,
        )
    }
}

fn record_one_of_each(ids: &IdGenerator) {
    ids.add_scope_and_code("portfolio", "s", "p1", &[]).unwrap();
    ids.add_scope_and_code("property_definition", "s", "TIF", &["Order".to_string()])
        .unwrap();
    ids.add_scope_and_code("cut_label", "s", "LondonClose", &[])
        .unwrap();
    ids.add_scope_and_code("order", "s", "o1", &[]).unwrap();
    ids.add_scope_and_code("recipe", "s", "r1", &[]).unwrap();
    ids.add_scope_and_code("ca_source", "s", "ca1", &[]).unwrap();
}

#[tokio::test]
async fn test_each_kind_dispatches_to_its_delete_operation() {
    let api = MockDeleteApi::default();
    let ids = IdGenerator::new("s");
    record_one_of_each(&ids);

    let report = delete_entities(&ids, &api).await;

    assert_eq!(
        api.calls(),
        vec![
            "delete_portfolio s p1",
            "delete_property_definition Order s TIF",
            "delete_cut_label_definition LondonClose",
            "delete_order s o1",
            "delete_configuration_recipe s r1",
            "delete_corporate_action_source s ca1",
        ]
    );
    assert_eq!(report.deleted.len(), 6);
    assert!(report.is_clean());
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_unrecognised_kind_is_skipped() {
    let api = MockDeleteApi::default();
    let ids = IdGenerator::new("s");
    ids.add_scope_and_code("legal_entity", "s", "le1", &[]).unwrap();
    ids.add_scope_and_code("portfolio", "s", "p1", &[]).unwrap();

    let report = delete_entities(&ids, &api).await;

    assert_eq!(api.calls(), vec!["delete_portfolio s p1"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].kind(), "legal_entity");
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_unrecognised_kind_is_warned_about() {
    capture_logs();
    let api = MockDeleteApi::default();
    let ids = IdGenerator::new("s");
    ids.add_scope_and_code("legal_entity_audit", "s", "le-warn", &[])
        .unwrap();

    delete_entities(&ids, &api).await;

    let records = logged_mentioning("legal_entity_audit");
    let warnings: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].1.contains("le-warn"));
    assert!(records.iter().all(|(level, _)| *level != Level::Error));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_failed_deletion_is_logged_as_error() {
    capture_logs();
    let api = MockDeleteApi::default();
    api.fail_on("order-logged-failure");
    let ids = IdGenerator::new("s");
    ids.add_scope_and_code("order", "s", "order-logged-failure", &[])
        .unwrap();

    let report = delete_entities(&ids, &api).await;

    assert_eq!(report.failed.len(), 1);
    let records = logged_mentioning("order-logged-failure");
    assert!(records
        .iter()
        .any(|(level, message)| *level == Level::Error && message.contains("not found")));
    assert!(records.iter().all(|(level, _)| *level != Level::Warn));
}

#[tokio::test]
async fn test_failed_deletion_does_not_stop_the_pass() {
    let api = MockDeleteApi::default();
    api.fail_on("p1");
    let ids = IdGenerator::new("s");
    record_one_of_each(&ids);

    let report = delete_entities(&ids, &api).await;

    // Every entity is attempted exactly once.
    assert_eq!(api.calls().len(), 6);
    assert_eq!(
        report.failed,
        vec![TrackedEntity::Portfolio {
            scope: "s".to_string(),
            code: "p1".to_string(),
        }]
    );
    assert_eq!(report.deleted.len(), 5);
}

#[tokio::test]
async fn test_second_pass_has_nothing_to_delete() {
    let api = MockDeleteApi::default();
    let ids = IdGenerator::new("s");
    ids.add_scope_and_code("order", "s", "o1", &[]).unwrap();

    delete_entities(&ids, &api).await;
    let report = delete_entities(&ids, &api).await;

    assert_eq!(report, Default::default());
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_session_teardown_deletes_what_tests_created() {
    let api = MockDeleteApi::default();
    let session = TestSession::new(api.clone(), "sdk-tests");

    let ids = session.shared_ids();
    let worker = tokio::spawn(async move {
        ids.generate_scope_and_code("portfolio", None, Some("p-"), &[])
            .unwrap()
    });
    let portfolio = worker.await.unwrap();
    session
        .ids()
        .generate_scope_and_code("cut_label", None, Some("cut-"), &[])
        .unwrap();

    let report = session.teardown().await;

    assert_eq!(report.deleted.len(), 2);
    assert_eq!(report.deleted[0], portfolio);
    assert_eq!(
        api.calls()[0],
        format!("delete_portfolio sdk-tests {}", portfolio.code())
    );
    assert!(api.calls()[1].starts_with("delete_cut_label_definition cut-"));
}
