//! Data definition model.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::configuration::Configuration;
use crate::errors::{ModelError, Result, ValidationError};
use crate::validation::{check_max_length, check_min_length, check_pattern};

/// Pattern every data item `name` must match.
pub const NAME_PATTERN: &str = r"^[a-zA-Z0-9\-_]+$";

const NAME_MIN_LENGTH: usize = 1;
const NAME_MAX_LENGTH: usize = 256;
const DATA_TYPE_MAX_LENGTH: usize = 128;
const KEY_TYPE_MAX_LENGTH: usize = 128;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("Invalid regex pattern"));

/// The declared fields of a [`DataDefinition`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataDefinitionField {
    Address,
    Name,
    DataType,
    KeyType,
    AllowNull,
    AllowMissing,
}

impl DataDefinitionField {
    pub const ALL: [DataDefinitionField; 6] = [
        Self::Address,
        Self::Name,
        Self::DataType,
        Self::KeyType,
        Self::AllowNull,
        Self::AllowMissing,
    ];

    /// Attribute (snake_case) spelling.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Name => "name",
            Self::DataType => "data_type",
            Self::KeyType => "key_type",
            Self::AllowNull => "allow_null",
            Self::AllowMissing => "allow_missing",
        }
    }

    /// Wire protocol (JSON) spelling.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Name => "name",
            Self::DataType => "dataType",
            Self::KeyType => "keyType",
            Self::AllowNull => "allowNull",
            Self::AllowMissing => "allowMissing",
        }
    }

    /// The key used by [`DataDefinition::to_dict`].
    pub fn key(self, serialize: bool) -> &'static str {
        if serialize {
            self.wire_name()
        } else {
            self.attribute()
        }
    }
}

/// Describes how one item of a tabular data set is addressed, named, typed
/// and keyed, and whether it may be null or missing.
///
/// Every string setter re-validates against the [`Configuration`] the record
/// was built with. Equality and hashing look only at the six field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "DataDefinitionWire", try_from = "DataDefinitionWire")]
pub struct DataDefinition {
    address: Option<String>,
    name: Option<String>,
    data_type: Option<String>,
    key_type: Option<String>,
    allow_null: Option<bool>,
    allow_missing: Option<bool>,
    configuration: Configuration,
}

impl DataDefinition {
    /// Creates an empty data definition.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            address: None,
            name: None,
            data_type: None,
            key_type: None,
            allow_null: None,
            allow_missing: None,
            configuration,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The internal address of the unit in the provided data; corresponds to
    /// the external name of the data item.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The name under which the data item appears.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The data type every value under this key is expected to have, e.g.
    /// `string`, `integer`, `decimal` or `result0d`.
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    /// The key role: `Unique`, `PartOfUnique`, `Leaf` or `CompositeLeaf`.
    pub fn key_type(&self) -> Option<&str> {
        self.key_type.as_deref()
    }

    /// The path must exist (unless missing values are allowed) but the value
    /// may be null.
    pub fn allow_null(&self) -> Option<bool> {
        self.allow_null
    }

    /// The path may be absent; if present it may not be null unless nulls
    /// are allowed.
    pub fn allow_missing(&self) -> Option<bool> {
        self.allow_missing
    }

    pub fn set_address(&mut self, address: Option<String>) {
        self.address = address;
    }

    pub fn set_name(&mut self, name: Option<String>) -> std::result::Result<(), ValidationError> {
        let value = name.as_deref();
        check_max_length(&self.configuration, "name", value, NAME_MAX_LENGTH)?;
        check_min_length(&self.configuration, "name", value, NAME_MIN_LENGTH)?;
        check_pattern(&self.configuration, "name", value, &NAME_REGEX, NAME_PATTERN)?;
        self.name = name;
        Ok(())
    }

    pub fn set_data_type(
        &mut self,
        data_type: Option<String>,
    ) -> std::result::Result<(), ValidationError> {
        check_max_length(
            &self.configuration,
            "data_type",
            data_type.as_deref(),
            DATA_TYPE_MAX_LENGTH,
        )?;
        self.data_type = data_type;
        Ok(())
    }

    pub fn set_key_type(
        &mut self,
        key_type: Option<String>,
    ) -> std::result::Result<(), ValidationError> {
        check_max_length(
            &self.configuration,
            "key_type",
            key_type.as_deref(),
            KEY_TYPE_MAX_LENGTH,
        )?;
        self.key_type = key_type;
        Ok(())
    }

    pub fn set_allow_null(&mut self, allow_null: Option<bool>) {
        self.allow_null = allow_null;
    }

    pub fn set_allow_missing(&mut self, allow_missing: Option<bool>) {
        self.allow_missing = allow_missing;
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.set_address(Some(address.into()));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        self.set_name(Some(name.into()))?;
        Ok(self)
    }

    pub fn with_data_type(
        mut self,
        data_type: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        self.set_data_type(Some(data_type.into()))?;
        Ok(self)
    }

    pub fn with_key_type(
        mut self,
        key_type: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        self.set_key_type(Some(key_type.into()))?;
        Ok(self)
    }

    pub fn with_allow_null(mut self, allow_null: bool) -> Self {
        self.set_allow_null(Some(allow_null));
        self
    }

    pub fn with_allow_missing(mut self, allow_missing: bool) -> Self {
        self.set_allow_missing(Some(allow_missing));
        self
    }

    /// Current value of `field` as JSON; absent values are `null`.
    pub fn value(&self, field: DataDefinitionField) -> Value {
        let string = |v: &Option<String>| v.clone().map(Value::String).unwrap_or(Value::Null);
        let flag = |v: Option<bool>| v.map(Value::Bool).unwrap_or(Value::Null);

        match field {
            DataDefinitionField::Address => string(&self.address),
            DataDefinitionField::Name => string(&self.name),
            DataDefinitionField::DataType => string(&self.data_type),
            DataDefinitionField::KeyType => string(&self.key_type),
            DataDefinitionField::AllowNull => flag(self.allow_null),
            DataDefinitionField::AllowMissing => flag(self.allow_missing),
        }
    }

    /// Returns every declared field exactly once, in declaration order.
    ///
    /// With `serialize` set the keys use their wire spelling (`dataType`,
    /// `allowNull`, ...), otherwise the attribute spelling.
    pub fn to_dict(&self, serialize: bool) -> Map<String, Value> {
        DataDefinitionField::ALL
            .iter()
            .map(|field| (field.key(serialize).to_string(), self.value(*field)))
            .collect()
    }

    /// Rebuilds a data definition from a map produced by [`to_dict`](Self::to_dict).
    ///
    /// Keys may use either spelling. Every value passes through the
    /// validating setters.
    pub fn from_dict(map: &Map<String, Value>, configuration: Configuration) -> Result<Self> {
        let mut definition = Self::new(configuration);

        for field in DataDefinitionField::ALL {
            let value = map
                .get(field.wire_name())
                .or_else(|| map.get(field.attribute()))
                .unwrap_or(&Value::Null);

            match field {
                DataDefinitionField::Address => definition.set_address(text_value(field, value)?),
                DataDefinitionField::Name => definition.set_name(text_value(field, value)?)?,
                DataDefinitionField::DataType => {
                    definition.set_data_type(text_value(field, value)?)?
                }
                DataDefinitionField::KeyType => definition.set_key_type(text_value(field, value)?)?,
                DataDefinitionField::AllowNull => {
                    definition.set_allow_null(flag_value(field, value)?)
                }
                DataDefinitionField::AllowMissing => {
                    definition.set_allow_missing(flag_value(field, value)?)
                }
            }
        }

        Ok(definition)
    }

    /// Parses the wire JSON form, validating with `configuration`.
    pub fn from_wire_json(json: &str, configuration: Configuration) -> Result<Self> {
        let wire: DataDefinitionWire = serde_json::from_str(json)?;
        wire.into_definition(configuration)
    }

    fn fields(
        &self,
    ) -> (
        &Option<String>,
        &Option<String>,
        &Option<String>,
        &Option<String>,
        Option<bool>,
        Option<bool>,
    ) {
        (
            &self.address,
            &self.name,
            &self.data_type,
            &self.key_type,
            self.allow_null,
            self.allow_missing,
        )
    }
}

fn text_value(field: DataDefinitionField, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ModelError::InvalidType {
            field: field.attribute(),
            expected: "string",
        }),
    }
}

fn flag_value(field: DataDefinitionField, value: &Value) -> Result<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        _ => Err(ModelError::InvalidType {
            field: field.attribute(),
            expected: "boolean",
        }),
    }
}

impl PartialEq for DataDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl Eq for DataDefinition {}

impl Hash for DataDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields().hash(state);
    }
}

impl fmt::Display for DataDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered =
            serde_json::to_string_pretty(&Value::Object(self.to_dict(false))).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Wire representation; absent values are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataDefinitionWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allow_null: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allow_missing: Option<bool>,
}

impl DataDefinitionWire {
    fn into_definition(self, configuration: Configuration) -> Result<DataDefinition> {
        let mut definition = DataDefinition::new(configuration);
        definition.set_address(self.address);
        definition.set_name(self.name)?;
        definition.set_data_type(self.data_type)?;
        definition.set_key_type(self.key_type)?;
        definition.set_allow_null(self.allow_null);
        definition.set_allow_missing(self.allow_missing);
        Ok(definition)
    }
}

impl From<DataDefinition> for DataDefinitionWire {
    fn from(definition: DataDefinition) -> Self {
        Self {
            address: definition.address,
            name: definition.name,
            data_type: definition.data_type,
            key_type: definition.key_type,
            allow_null: definition.allow_null,
            allow_missing: definition.allow_missing,
        }
    }
}

impl TryFrom<DataDefinitionWire> for DataDefinition {
    type Error = ModelError;

    fn try_from(wire: DataDefinitionWire) -> Result<Self> {
        wire.into_definition(Configuration::default())
    }
}
