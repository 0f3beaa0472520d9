//! Table assembly.

use tradewinds_core::{
    BillingMode, CoreResult, KeyAttribute, LogicalId, Resource, Stack, TableClass,
    TableSpec,
};

use crate::config::StackConfig;

/// Logical ids of the two tables.
#[derive(Debug, Clone)]
pub struct StorageIds {
    pub stock_analytics: LogicalId,
    pub portfolio: LogicalId,
}

/// Declare the analytics and portfolio tables.
///
/// Both share the `stock`/`date` composite key; uniqueness per key pair
/// is the storage engine's concern.
pub fn assemble_storage(config: &StackConfig, stack: &mut Stack) -> CoreResult<StorageIds> {
    let stock_analytics = add_table(stack, &config.stock_analytics_table)?;
    let portfolio = add_table(stack, &config.portfolio_table)?;
    Ok(StorageIds {
        stock_analytics,
        portfolio,
    })
}

fn add_table(stack: &mut Stack, table_name: &str) -> CoreResult<LogicalId> {
    let id = LogicalId::from(table_name);
    stack.insert(
        id.clone(),
        Resource::Table(TableSpec {
            table_name: table_name.to_string(),
            partition_key: KeyAttribute::string("stock"),
            sort_key: KeyAttribute::string("date"),
            billing: BillingMode::OnDemand,
            class: TableClass::Standard,
            deletion_protection: true,
        }),
    )?;
    Ok(id)
}
