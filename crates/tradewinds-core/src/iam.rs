//! Roles, policies, and grant relations.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::ids::LogicalId;

/// Identity of a cloud service allowed to assume a role or invoke a
/// resource, e.g. `ecs-tasks.amazonaws.com`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServicePrincipal(String);

impl ServicePrincipal {
    pub fn new(service: impl Into<String>) -> Self {
        ServicePrincipal(service.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Allow,
    Deny,
}

/// One statement in an inline policy document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatement {
    pub effect: Effect,
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}

impl PolicyStatement {
    pub fn allow(actions: &[&str], resources: &[&str]) -> Self {
        PolicyStatement {
            effect: Effect::Allow,
            actions: actions.iter().map(|s| s.to_string()).collect(),
            resources: resources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Specification for an assumable role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    pub name: String,
    pub assumed_by: ServicePrincipal,
    /// Provider-managed policy names attached to the role.
    pub managed_policies: Vec<String>,
    pub inline_statements: Vec<PolicyStatement>,
}

impl RoleSpec {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::EmptyName("role"));
        }
        Ok(())
    }
}

/// Resource-level permission: a service principal may invoke a function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub function: LogicalId,
    pub principal: ServicePrincipal,
    pub action: String,
}

/// Access level of a table grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    ReadOnly,
    FullAccess,
}

/// Authorization edge between a role and a table.
///
/// Grants live in an ordered set on the stack, so granting the same
/// access twice is a no-op rather than a duplicate policy statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Grant {
    pub role: LogicalId,
    pub table: LogicalId,
    pub access: AccessLevel,
}
