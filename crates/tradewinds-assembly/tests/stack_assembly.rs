//! Structural assertions over the assembled stack.

use std::io::Write;

use tradewinds_assembly::{Finding, StackConfig, assemble, lint};
use tradewinds_core::{AccessLevel, CpuArchitecture, Resource, SubnetVisibility};

#[test]
fn one_network_no_nat_two_zones() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let networks = stack.networks();
    assert_eq!(networks.len(), 1);
    let (_, network) = networks[0];
    assert_eq!(network.nat_gateways, 0);
    assert!(network.max_azs >= 2);
    assert_eq!(network.public_subnet_groups().count(), 1);
}

#[test]
fn two_identical_tasks_differing_only_in_role() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let tasks = stack.task_definitions();
    assert_eq!(tasks.len(), 2);

    let (_, a) = tasks[0];
    let (_, b) = tasks[1];
    assert_eq!(a.cpu_units, b.cpu_units);
    assert_eq!(a.memory_mib, b.memory_mib);
    assert_eq!(a.architecture, b.architecture);
    assert_eq!(a.architecture, CpuArchitecture::Arm64);
    assert_eq!(a.container.image, b.container.image);

    let mut roles = [a.role_env().unwrap(), b.role_env().unwrap()];
    roles.sort();
    assert_eq!(roles, ["PORTFOLIO_MANAGER", "STOCK_ANALYST"]);
    assert_ne!(
        a.container.logging.stream_prefix,
        b.container.logging.stream_prefix
    );
}

#[test]
fn every_task_role_holds_full_access_to_both_tables() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let table_ids: Vec<_> = stack.tables().into_iter().map(|(id, _)| id).collect();
    assert_eq!(table_ids.len(), 2);

    for (_, task) in stack.task_definitions() {
        for table in &table_ids {
            assert!(
                stack
                    .grants_for_role(&task.task_role)
                    .any(|g| &g.table == *table && g.access == AccessLevel::FullAccess),
                "task {} lacks full access to {table}",
                task.family
            );
        }
    }
}

#[test]
fn each_rule_targets_exactly_one_task_with_distinct_cron() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let rules = stack.schedule_rules();
    assert_eq!(rules.len(), 2);

    let (_, first) = rules[0];
    let (_, second) = rules[1];
    assert_ne!(first.cron, second.cron);
    assert_ne!(first.target.task, second.target.task);

    for (_, rule) in &rules {
        let target = stack.get(&rule.target.task).unwrap();
        assert!(matches!(target, Resource::TaskDefinition(_)));
        assert_eq!(rule.target.task_count, 1);
        assert!(rule.target.assign_public_ip);
        assert_eq!(rule.target.subnet_visibility, SubnetVisibility::Public);
    }
}

#[test]
fn tables_share_key_schema_and_are_protected() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let tables = stack.tables();
    assert_eq!(tables.len(), 2);
    for (_, table) in tables {
        assert_eq!(table.partition_key.name, "stock");
        assert_eq!(table.sort_key.name, "date");
        assert!(table.deletion_protection);
    }
}

#[test]
fn function_permission_and_agent_role_scope() {
    let stack = assemble(&StackConfig::default()).unwrap();

    let permissions = stack.permissions();
    assert_eq!(permissions.len(), 1);
    let (_, permission) = permissions[0];
    assert_eq!(permission.principal.as_str(), "bedrock.amazonaws.com");
    assert!(matches!(
        stack.get(&permission.function),
        Some(Resource::Function(_))
    ));

    let roles = stack.roles();
    let (_, agent_role) = roles
        .iter()
        .find(|(id, _)| id.as_str() == "BedrockAgentRole")
        .unwrap();
    assert_eq!(agent_role.assumed_by.as_str(), "bedrock.amazonaws.com");
    assert_eq!(agent_role.inline_statements.len(), 1);
    let statement = &agent_role.inline_statements[0];
    assert_eq!(statement.actions, ["bedrock:InvokeModel"]);
    assert_eq!(statement.resources.len(), 1);
    assert!(
        statement.resources[0]
            .ends_with("foundation-model/anthropic.claude-v2:1")
    );
}

#[test]
fn assembly_is_deterministic() {
    let config = StackConfig::default();
    let first = assemble(&config).unwrap();
    let second = assemble(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_schedules_are_flagged_as_single_weekday() {
    let stack = assemble(&StackConfig::default()).unwrap();
    let findings = lint(&stack);
    assert!(findings.iter().any(|f| matches!(
        f,
        Finding::SingleWeekdaySchedules { weekday, .. } if weekday == "MON"
    )));
}

#[test]
fn weekday_range_schedules_are_not_flagged() {
    let mut config = StackConfig::default();
    config.analyst_schedule.weekday = "MON-FRI".to_string();
    config.manager_schedule.weekday = "MON-FRI".to_string();
    let stack = assemble(&config).unwrap();
    assert!(
        !lint(&stack)
            .iter()
            .any(|f| matches!(f, Finding::SingleWeekdaySchedules { .. }))
    );
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "region = \"us-west-2\"").unwrap();
    let config = StackConfig::from_file(file.path()).unwrap();
    assert_eq!(config.region, "us-west-2");

    let stack = assemble(&config).unwrap();
    let (_, task) = stack.task_definitions()[0];
    let region = task
        .container
        .env
        .iter()
        .find(|e| e.name == "REGION")
        .unwrap();
    assert_eq!(region.value, "us-west-2");
}
