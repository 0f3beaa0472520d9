//! End-to-end: assemble the default stack and synthesize it.

use serde_json::Value;

use tradewinds_assembly::{StackConfig, assemble};
use tradewinds_synth::{Template, synthesize};

#[test]
fn every_resource_appears_exactly_once() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let template = synthesize(&stack).unwrap();
    assert_eq!(template.resources.len(), stack.len());
    for (id, _) in stack.iter() {
        assert!(template.resources.contains_key(id.as_str()));
    }
}

#[test]
fn task_role_record_carries_folded_grants() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let template = synthesize(&stack).unwrap();

    let role = &template.resources["ECSTaskRole"];
    let statements = role["inline_statements"].as_array().unwrap();
    // One full-access statement per table.
    assert_eq!(statements.len(), 2);
    for statement in statements {
        assert_eq!(statement["actions"], serde_json::json!(["dynamodb:*"]));
        assert_eq!(statement["resources"].as_array().unwrap().len(), 1);
    }

    let tables: Vec<&str> = statements
        .iter()
        .map(|s| s["resources"][0]["ref"].as_str().unwrap())
        .collect();
    assert!(tables.contains(&"StockAnalytics"));
    assert!(tables.contains(&"Portfolio"));
}

#[test]
fn agent_role_is_scoped_to_one_model() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let template = synthesize(&stack).unwrap();

    let role = &template.resources["BedrockAgentRole"];
    let statements = role["inline_statements"].as_array().unwrap();
    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0]["resources"],
        serde_json::json!([
            "arn:aws:bedrock:eu-central-1::foundation-model/anthropic.claude-v2:1"
        ])
    );
}

#[test]
fn template_round_trips_through_json() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let template = synthesize(&stack).unwrap();
    let rendered = template.to_json_pretty().unwrap();
    let parsed: Template = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, template);
}

#[test]
fn records_are_tagged_with_their_kind() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let template = synthesize(&stack).unwrap();
    assert_eq!(template.resources["ECSVPC"]["type"], Value::from("network"));
    assert_eq!(
        template.resources["StockAnalytics"]["type"],
        Value::from("table")
    );
    assert_eq!(
        template.resources["DailyStockAnalystRule"]["type"],
        Value::from("schedule_rule")
    );
}
