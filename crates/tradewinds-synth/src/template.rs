//! Template rendering.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use tradewinds_core::{AccessLevel, LogicalId, Resource, Stack};

use crate::error::SynthResult;

/// The deployable unit: every resource record, keyed by logical id in
/// assembly order. Logical-id references inside records are resolved to
/// provider identifiers by the external engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub description: String,
    pub resources: Map<String, Value>,
}

impl Template {
    pub fn to_json_pretty(&self) -> SynthResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render an assembled stack into one template document.
///
/// Fails if any cross-reference is dangling or points at a resource of
/// the wrong kind. Grants are folded into the owning role's inline
/// policy statements.
pub fn synthesize(stack: &Stack) -> SynthResult<Template> {
    crate::check_references(stack)?;

    let mut resources = Map::new();
    for (id, resource) in stack.iter() {
        let mut record = serde_json::to_value(resource)?;
        if let Resource::Role(_) = resource {
            fold_grants(stack, id, &mut record);
        }
        resources.insert(id.to_string(), record);
    }

    debug!(resources = resources.len(), "template rendered");
    Ok(Template {
        description: "Trading-agent infrastructure".to_string(),
        resources,
    })
}

/// Append one policy statement per grant held by `role` to the rendered
/// role record.
fn fold_grants(stack: &Stack, role: &LogicalId, record: &mut Value) {
    let statements: Vec<Value> = stack
        .grants_for_role(role)
        .map(|grant| {
            let actions = match grant.access {
                AccessLevel::FullAccess => json!(["dynamodb:*"]),
                AccessLevel::ReadOnly => json!([
                    "dynamodb:GetItem",
                    "dynamodb:Query",
                    "dynamodb:Scan",
                    "dynamodb:BatchGetItem"
                ]),
            };
            json!({
                "effect": "allow",
                "actions": actions,
                "resources": [{ "ref": grant.table.as_str() }],
            })
        })
        .collect();

    if statements.is_empty() {
        return;
    }
    if let Some(Value::Array(inline)) = record.get_mut("inline_statements") {
        inline.extend(statements);
    }
}
