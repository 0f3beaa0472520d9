//! The assembled stack: an ordered tree of resource descriptors.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compute::{ClusterSpec, TaskDefinitionSpec};
use crate::error::{CoreError, CoreResult};
use crate::function::FunctionSpec;
use crate::iam::{Grant, Permission, RoleSpec};
use crate::ids::LogicalId;
use crate::network::NetworkSpec;
use crate::schedule::ScheduleRuleSpec;
use crate::storage::TableSpec;

/// Discriminant of a [`Resource`], used for reference checking and
/// template type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Network,
    Cluster,
    TaskDefinition,
    ScheduleRule,
    Table,
    Function,
    Role,
    Permission,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Network => "network",
            ResourceKind::Cluster => "cluster",
            ResourceKind::TaskDefinition => "task_definition",
            ResourceKind::ScheduleRule => "schedule_rule",
            ResourceKind::Table => "table",
            ResourceKind::Function => "function",
            ResourceKind::Role => "role",
            ResourceKind::Permission => "permission",
        };
        f.write_str(s)
    }
}

/// Any resource a stack can declare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    Network(NetworkSpec),
    Cluster(ClusterSpec),
    TaskDefinition(TaskDefinitionSpec),
    ScheduleRule(ScheduleRuleSpec),
    Table(TableSpec),
    Function(FunctionSpec),
    Role(RoleSpec),
    Permission(Permission),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Network(_) => ResourceKind::Network,
            Resource::Cluster(_) => ResourceKind::Cluster,
            Resource::TaskDefinition(_) => ResourceKind::TaskDefinition,
            Resource::ScheduleRule(_) => ResourceKind::ScheduleRule,
            Resource::Table(_) => ResourceKind::Table,
            Resource::Function(_) => ResourceKind::Function,
            Resource::Role(_) => ResourceKind::Role,
            Resource::Permission(_) => ResourceKind::Permission,
        }
    }

    /// Logical ids this resource refers to, with the kind each is
    /// expected to resolve to.
    pub fn references(&self) -> Vec<(LogicalId, ResourceKind)> {
        match self {
            Resource::Network(_) | Resource::Table(_) | Resource::Role(_) => vec![],
            Resource::Cluster(c) => vec![(c.network.clone(), ResourceKind::Network)],
            Resource::TaskDefinition(t) => {
                vec![(t.task_role.clone(), ResourceKind::Role)]
            }
            Resource::ScheduleRule(r) => vec![
                (r.target.cluster.clone(), ResourceKind::Cluster),
                (r.target.task.clone(), ResourceKind::TaskDefinition),
            ],
            Resource::Function(f) => vec![(f.role.clone(), ResourceKind::Role)],
            Resource::Permission(p) => {
                vec![(p.function.clone(), ResourceKind::Function)]
            }
        }
    }

    fn validate(&self) -> CoreResult<()> {
        match self {
            Resource::Network(s) => s.validate(),
            Resource::TaskDefinition(s) => s.validate(),
            Resource::ScheduleRule(s) => s.validate(),
            Resource::Table(s) => s.validate(),
            Resource::Function(s) => s.validate(),
            Resource::Role(s) => s.validate(),
            Resource::Cluster(c) => {
                if c.name.is_empty() {
                    Err(CoreError::EmptyName("cluster"))
                } else {
                    Ok(())
                }
            }
            Resource::Permission(_) => Ok(()),
        }
    }
}

/// An ordered collection of resource descriptors plus the grant set.
///
/// Insertion order is preserved so synthesis output is deterministic;
/// the order carries no provisioning semantics, since the external
/// engine resolves dependencies from the explicit references.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stack {
    resources: Vec<(LogicalId, Resource)>,
    grants: BTreeSet<Grant>,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    /// Validate and add a resource under a unique logical id.
    pub fn insert(&mut self, id: LogicalId, resource: Resource) -> CoreResult<()> {
        if id.is_empty() {
            return Err(CoreError::EmptyName("logical id"));
        }
        if self.get(&id).is_some() {
            return Err(CoreError::DuplicateLogicalId(id.to_string()));
        }
        resource.validate()?;
        debug!(id = %id, kind = %resource.kind(), "resource added");
        self.resources.push((id, resource));
        Ok(())
    }

    /// Record a grant edge. Granting the same access twice is a no-op.
    pub fn grant(&mut self, grant: Grant) {
        if !self.grants.contains(&grant) {
            debug!(role = %grant.role, table = %grant.table, "grant added");
            self.grants.insert(grant);
        }
    }

    pub fn get(&self, id: &LogicalId) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|(rid, _)| rid == id)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogicalId, &Resource)> {
        self.resources.iter().map(|(id, r)| (id, r))
    }

    pub fn grants(&self) -> impl Iterator<Item = &Grant> {
        self.grants.iter()
    }

    /// Grants held by a specific role.
    pub fn grants_for_role<'a>(
        &'a self,
        role: &'a LogicalId,
    ) -> impl Iterator<Item = &'a Grant> {
        self.grants.iter().filter(move |g| &g.role == role)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn networks(&self) -> Vec<(&LogicalId, &NetworkSpec)> {
        self.filtered(|r| match r {
            Resource::Network(s) => Some(s),
            _ => None,
        })
    }

    pub fn task_definitions(&self) -> Vec<(&LogicalId, &TaskDefinitionSpec)> {
        self.filtered(|r| match r {
            Resource::TaskDefinition(s) => Some(s),
            _ => None,
        })
    }

    pub fn schedule_rules(&self) -> Vec<(&LogicalId, &ScheduleRuleSpec)> {
        self.filtered(|r| match r {
            Resource::ScheduleRule(s) => Some(s),
            _ => None,
        })
    }

    pub fn tables(&self) -> Vec<(&LogicalId, &TableSpec)> {
        self.filtered(|r| match r {
            Resource::Table(s) => Some(s),
            _ => None,
        })
    }

    pub fn roles(&self) -> Vec<(&LogicalId, &RoleSpec)> {
        self.filtered(|r| match r {
            Resource::Role(s) => Some(s),
            _ => None,
        })
    }

    pub fn functions(&self) -> Vec<(&LogicalId, &FunctionSpec)> {
        self.filtered(|r| match r {
            Resource::Function(s) => Some(s),
            _ => None,
        })
    }

    pub fn permissions(&self) -> Vec<(&LogicalId, &Permission)> {
        self.filtered(|r| match r {
            Resource::Permission(s) => Some(s),
            _ => None,
        })
    }

    fn filtered<'a, T>(
        &'a self,
        select: impl Fn(&'a Resource) -> Option<&'a T>,
    ) -> Vec<(&'a LogicalId, &'a T)> {
        self.resources
            .iter()
            .filter_map(|(id, r)| select(r).map(|s| (id, s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iam::{AccessLevel, ServicePrincipal};

    fn role(name: &str) -> Resource {
        Resource::Role(RoleSpec {
            name: name.into(),
            assumed_by: ServicePrincipal::new("ecs-tasks.amazonaws.com"),
            managed_policies: vec![],
            inline_statements: vec![],
        })
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut stack = Stack::new();
        stack.insert(LogicalId::from("TaskRole"), role("a")).unwrap();
        let err = stack.insert(LogicalId::from("TaskRole"), role("b"));
        assert!(matches!(err, Err(CoreError::DuplicateLogicalId(_))));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn grants_are_idempotent() {
        let mut stack = Stack::new();
        let grant = Grant {
            role: LogicalId::from("TaskRole"),
            table: LogicalId::from("Portfolio"),
            access: AccessLevel::FullAccess,
        };
        stack.grant(grant.clone());
        stack.grant(grant);
        assert_eq!(stack.grants().count(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut stack = Stack::new();
        stack.insert(LogicalId::from("B"), role("b")).unwrap();
        stack.insert(LogicalId::from("A"), role("a")).unwrap();
        let ids: Vec<_> = stack.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
    }
}
