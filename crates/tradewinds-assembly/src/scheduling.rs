//! Schedule assembly.
//!
//! Two independent calendar rules, one per workload. The midday offset of
//! the manager rule after the analyst rule is business policy, not an
//! enforced dependency.

use tradewinds_core::{
    CoreResult, EcsTarget, LogicalId, Resource, ScheduleRuleSpec, Stack, SubnetVisibility,
};

use crate::config::StackConfig;
use crate::network_compute::ComputeIds;

/// Declare both calendar rules, each targeting exactly one task.
pub fn assemble_schedules(
    config: &StackConfig,
    stack: &mut Stack,
    compute: &ComputeIds,
) -> CoreResult<()> {
    add_rule(
        stack,
        "DailyStockAnalystRule",
        "stockAnalystRule",
        config.analyst_schedule.clone(),
        compute,
        &compute.analyst_task,
    )?;
    add_rule(
        stack,
        "DailyPortfolioManagerRule",
        "portfolioManagerRule",
        config.manager_schedule.clone(),
        compute,
        &compute.manager_task,
    )?;
    Ok(())
}

fn add_rule(
    stack: &mut Stack,
    id: &str,
    name: &str,
    cron: tradewinds_core::CronSpec,
    compute: &ComputeIds,
    task: &LogicalId,
) -> CoreResult<()> {
    stack.insert(
        LogicalId::from(id),
        Resource::ScheduleRule(ScheduleRuleSpec {
            name: name.to_string(),
            cron,
            target: EcsTarget {
                cluster: compute.cluster.clone(),
                task: task.clone(),
                task_count: 1,
                subnet_visibility: SubnetVisibility::Public,
                assign_public_ip: true,
            },
        }),
    )
}
