//! tradewinds-assembly — builds the trading-agent stack.
//!
//! One pure pass over a [`StackConfig`] produces the complete [`Stack`]:
//! network and compute, tables and grants, schedules, and the search
//! function with its agent permissions. Assembly performs no I/O beyond
//! optionally reading the config file; provisioning is the external
//! engine's job.

pub mod agent;
pub mod config;
pub mod lint;
pub mod network_compute;
pub mod scheduling;
pub mod storage;

pub use config::{ConfigError, StackConfig};
pub use lint::{Finding, lint};
pub use network_compute::{ComputeIds, WorkloadRole};
pub use storage::StorageIds;

use tracing::info;

use tradewinds_core::{CoreResult, Stack};

/// Assemble the full stack from a configuration.
///
/// Deterministic: equal configs produce equal stacks.
pub fn assemble(config: &StackConfig) -> CoreResult<Stack> {
    let mut stack = Stack::new();

    let storage = storage::assemble_storage(config, &mut stack)?;
    let compute = network_compute::assemble_network_compute(config, &mut stack)?;
    scheduling::assemble_schedules(config, &mut stack, &compute)?;

    network_compute::grant_table_access(
        &mut stack,
        &[&compute.task_role],
        &[&storage.stock_analytics, &storage.portfolio],
    );

    agent::assemble_agent(config, &mut stack)?;

    info!(
        resources = stack.len(),
        grants = stack.grants().count(),
        "stack assembled"
    );
    Ok(stack)
}
