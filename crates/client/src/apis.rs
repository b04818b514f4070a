//! API group traits.
//!
//! One trait per remote API group, so callers (and tests) can depend on
//! just the operations they use. [`LusidClient`](crate::LusidClient)
//! implements all of them.

use async_trait::async_trait;
use lusid_models::{
    CreatePropertyDefinitionRequest, CreateTransactionPortfolioRequest, CutLabelDefinition,
    DeletedEntityResponse, InstrumentIdTypeDescriptor, Portfolio, PropertyDefinition,
    ResourceList, VersionSummary,
};

use crate::error::Result;

#[async_trait]
pub trait ApplicationMetadataApi: Send + Sync {
    /// Versions of the running service.
    ///
    /// GET /api/metadata/versions
    async fn get_lusid_versions(&self) -> Result<VersionSummary>;
}

#[async_trait]
pub trait InstrumentsApi: Send + Sync {
    /// Identifier types instruments can be looked up by.
    ///
    /// GET /api/instruments/identifierTypes
    async fn get_instrument_identifier_types(
        &self,
    ) -> Result<ResourceList<InstrumentIdTypeDescriptor>>;
}

#[async_trait]
pub trait TransactionPortfoliosApi: Send + Sync {
    /// POST /api/transactionportfolios/{scope}
    async fn create_portfolio(
        &self,
        scope: &str,
        request: &CreateTransactionPortfolioRequest,
    ) -> Result<Portfolio>;
}

#[async_trait]
pub trait PortfoliosApi: Send + Sync {
    /// DELETE /api/portfolios/{scope}/{code}
    async fn delete_portfolio(&self, scope: &str, code: &str) -> Result<DeletedEntityResponse>;
}

#[async_trait]
pub trait PropertyDefinitionsApi: Send + Sync {
    /// POST /api/propertydefinitions
    async fn create_property_definition(
        &self,
        request: &CreatePropertyDefinitionRequest,
    ) -> Result<PropertyDefinition>;

    /// DELETE /api/propertydefinitions/{domain}/{scope}/{code}
    async fn delete_property_definition(
        &self,
        domain: &str,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse>;
}

#[async_trait]
pub trait CutLabelDefinitionsApi: Send + Sync {
    /// POST /api/systemconfiguration/cutlabels
    async fn create_cut_label_definition(
        &self,
        request: &CutLabelDefinition,
    ) -> Result<CutLabelDefinition>;

    /// Cut labels are global, so only the code addresses one.
    ///
    /// DELETE /api/systemconfiguration/cutlabels/{code}
    async fn delete_cut_label_definition(&self, code: &str) -> Result<DeletedEntityResponse>;
}

#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// DELETE /api/orders/{scope}/{code}
    async fn delete_order(&self, scope: &str, code: &str) -> Result<DeletedEntityResponse>;
}

#[async_trait]
pub trait ConfigurationRecipeApi: Send + Sync {
    /// DELETE /api/recipes/{scope}/{code}
    async fn delete_configuration_recipe(
        &self,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse>;
}

#[async_trait]
pub trait CorporateActionSourcesApi: Send + Sync {
    /// DELETE /api/corporateactionsources/{scope}/{code}
    async fn delete_corporate_action_source(
        &self,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse>;
}
