//! Network and compute assembly.
//!
//! Produces the virtual network, the cluster bound to it, the shared
//! task role, and the two task definitions. The two tasks are identical
//! except for the role-identifying environment variable and the log
//! stream prefix; both are built from the same container image.

use tradewinds_core::{
    AccessLevel, ClusterSpec, ContainerSpec, CoreResult, CpuArchitecture, EnvVar, Grant,
    ImageAsset, LogConfig, LogicalId, NetworkSpec, OsFamily, Resource, RoleSpec,
    ServicePrincipal, Stack, SubnetGroup, SubnetVisibility, TaskDefinitionSpec,
};

use crate::config::StackConfig;

/// Task-level sizing shared by both workloads.
pub const TASK_CPU_UNITS: u32 = 2048;
pub const TASK_MEMORY_MIB: u32 = 8192;
/// CloudWatch retention for container and function logs.
pub const LOG_RETENTION_DAYS: u16 = 5;

const MANAGED_MODEL_ACCESS_POLICY: &str = "AmazonBedrockFullAccess";

/// The two container workload roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadRole {
    StockAnalyst,
    PortfolioManager,
}

impl WorkloadRole {
    /// Value of the `ROLE` environment variable the container dispatches on.
    pub fn env_value(self) -> &'static str {
        match self {
            WorkloadRole::StockAnalyst => "STOCK_ANALYST",
            WorkloadRole::PortfolioManager => "PORTFOLIO_MANAGER",
        }
    }

    pub fn stream_prefix(self) -> &'static str {
        match self {
            WorkloadRole::StockAnalyst => "stockAnalyst",
            WorkloadRole::PortfolioManager => "portfolioManager",
        }
    }

    fn task_id(self) -> &'static str {
        match self {
            WorkloadRole::StockAnalyst => "TaskDefStockAnalyst",
            WorkloadRole::PortfolioManager => "TaskDefPortfolioManager",
        }
    }

    fn container_name(self) -> &'static str {
        match self {
            WorkloadRole::StockAnalyst => "StockAnalystContainer",
            WorkloadRole::PortfolioManager => "PortfolioManagerContainer",
        }
    }
}

/// Logical ids of the network/compute resources, passed explicitly to
/// the assemblers that reference them.
#[derive(Debug, Clone)]
pub struct ComputeIds {
    pub network: LogicalId,
    pub cluster: LogicalId,
    pub task_role: LogicalId,
    pub analyst_task: LogicalId,
    pub manager_task: LogicalId,
}

/// Declare the network, cluster, shared task role, and both task
/// definitions.
pub fn assemble_network_compute(
    config: &StackConfig,
    stack: &mut Stack,
) -> CoreResult<ComputeIds> {
    let network = LogicalId::from("ECSVPC");
    stack.insert(
        network.clone(),
        Resource::Network(NetworkSpec {
            name: "ECSVPC".to_string(),
            cidr: "10.0.0.0/24".parse()?,
            max_azs: 2,
            // No NAT to reduce cost; tasks get a public IP instead.
            nat_gateways: 0,
            internet_gateway: true,
            dns_support: true,
            dns_hostnames: true,
            subnets: vec![SubnetGroup {
                name: "Public".to_string(),
                cidr_mask: 26,
                visibility: SubnetVisibility::Public,
            }],
        }),
    )?;

    let cluster = LogicalId::from("Cluster");
    stack.insert(
        cluster.clone(),
        Resource::Cluster(ClusterSpec {
            name: "Cluster".to_string(),
            network: network.clone(),
        }),
    )?;

    let task_role = LogicalId::from("ECSTaskRole");
    stack.insert(
        task_role.clone(),
        Resource::Role(RoleSpec {
            name: "ECSTaskRole".to_string(),
            assumed_by: ServicePrincipal::new("ecs-tasks.amazonaws.com"),
            managed_policies: vec![MANAGED_MODEL_ACCESS_POLICY.to_string()],
            inline_statements: vec![],
        }),
    )?;

    let analyst_task = add_task_definition(
        config,
        stack,
        &task_role,
        WorkloadRole::StockAnalyst,
    )?;
    let manager_task = add_task_definition(
        config,
        stack,
        &task_role,
        WorkloadRole::PortfolioManager,
    )?;

    Ok(ComputeIds {
        network,
        cluster,
        task_role,
        analyst_task,
        manager_task,
    })
}

fn add_task_definition(
    config: &StackConfig,
    stack: &mut Stack,
    task_role: &LogicalId,
    role: WorkloadRole,
) -> CoreResult<LogicalId> {
    let id = LogicalId::from(role.task_id());
    stack.insert(
        id.clone(),
        Resource::TaskDefinition(TaskDefinitionSpec {
            family: role.task_id().to_string(),
            cpu_units: TASK_CPU_UNITS,
            memory_mib: TASK_MEMORY_MIB,
            architecture: CpuArchitecture::Arm64,
            os_family: OsFamily::Linux,
            task_role: task_role.clone(),
            container: ContainerSpec {
                name: role.container_name().to_string(),
                image: ImageAsset {
                    build_context: config.container_build_context.clone(),
                    asset_name: Some("Container".to_string()),
                    platform: None,
                    command: vec![],
                },
                cpu_units: TASK_CPU_UNITS,
                memory_mib: TASK_MEMORY_MIB,
                logging: LogConfig {
                    stream_prefix: role.stream_prefix().to_string(),
                    retention_days: LOG_RETENTION_DAYS,
                },
                env: container_env(config, role),
            },
        }),
    )?;
    Ok(id)
}

/// The four environment variables every agent container receives.
fn container_env(config: &StackConfig, role: WorkloadRole) -> Vec<EnvVar> {
    let var = |name: &str, value: &str| EnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };
    vec![
        var("TABLE_NAME_STOCK_ANALYTICS", &config.stock_analytics_table),
        var("TABLE_NAME_PORTFOLIO", &config.portfolio_table),
        var("REGION", &config.region),
        var("ROLE", role.env_value()),
    ]
}

/// Grant both task roles full access to the given tables.
///
/// Re-running the wiring adds no duplicate grants; the stack's grant set
/// is idempotent.
pub fn grant_table_access(stack: &mut Stack, roles: &[&LogicalId], tables: &[&LogicalId]) {
    for role in roles {
        for table in tables {
            stack.grant(Grant {
                role: (*role).clone(),
                table: (*table).clone(),
                access: AccessLevel::FullAccess,
            });
        }
    }
}
