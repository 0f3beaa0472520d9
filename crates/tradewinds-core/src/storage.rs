//! Key-value table descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Attribute type of a key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Number,
    Binary,
}

/// One component of a table's composite key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyAttribute {
    pub name: String,
    pub attr_type: AttributeType,
}

impl KeyAttribute {
    pub fn string(name: &str) -> Self {
        KeyAttribute {
            name: name.to_string(),
            attr_type: AttributeType::String,
        }
    }
}

/// Pricing model for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    /// Charged per operation, no pre-reserved capacity.
    OnDemand,
    Provisioned,
}

/// Storage class for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableClass {
    Standard,
    InfrequentAccess,
}

/// Specification for one persistent keyed table.
///
/// Item uniqueness over the partition+sort pair is enforced by the
/// external storage engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub billing: BillingMode,
    pub class: TableClass,
    pub deletion_protection: bool,
}

impl TableSpec {
    pub fn validate(&self) -> CoreResult<()> {
        if self.table_name.is_empty() {
            return Err(CoreError::EmptyName("table"));
        }
        if self.partition_key.name.is_empty() || self.sort_key.name.is_empty() {
            return Err(CoreError::EmptyName("table key attribute"));
        }
        Ok(())
    }
}
