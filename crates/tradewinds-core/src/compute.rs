//! Container cluster and task-definition descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::ids::LogicalId;

/// CPU architecture a task definition runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuArchitecture {
    Arm64,
    X86_64,
}

/// Operating system family for the task runtime platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Linux,
}

/// Target platform for a locally built container image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePlatform {
    LinuxAmd64,
    LinuxArm64,
}

/// A container image built from a local source tree.
///
/// The image itself is an external collaborator; this descriptor only
/// records the build context and how the built image is started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Directory containing the Dockerfile and build inputs.
    pub build_context: String,
    pub asset_name: Option<String>,
    pub platform: Option<ImagePlatform>,
    /// Command override (entry point) passed to the built image.
    pub command: Vec<String>,
}

/// One environment variable injected into a container at start.
///
/// Kept as an ordered list rather than a map so assembly output is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// Log driver configuration for a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    pub stream_prefix: String,
    pub retention_days: u16,
}

/// The single container inside a task definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub image: ImageAsset,
    pub cpu_units: u32,
    pub memory_mib: u32,
    pub logging: LogConfig,
    pub env: Vec<EnvVar>,
}

/// Logical grouping for container tasks, bound to a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSpec {
    pub name: String,
    pub network: LogicalId,
}

/// Immutable template for one container workload role.
///
/// Tasks are scheduled onto managed capacity; no host machines are
/// declared anywhere in the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinitionSpec {
    pub family: String,
    pub cpu_units: u32,
    pub memory_mib: u32,
    pub architecture: CpuArchitecture,
    pub os_family: OsFamily,
    /// Role the running task assumes.
    pub task_role: LogicalId,
    pub container: ContainerSpec,
}

impl TaskDefinitionSpec {
    pub fn validate(&self) -> CoreResult<()> {
        if self.family.is_empty() {
            return Err(CoreError::EmptyName("task definition"));
        }
        if self.container.name.is_empty() {
            return Err(CoreError::EmptyName("container"));
        }
        if self.cpu_units == 0 || self.memory_mib == 0 {
            return Err(CoreError::InvalidCapacity(format!(
                "task {} must declare non-zero cpu and memory",
                self.family
            )));
        }
        if self.container.memory_mib > self.memory_mib {
            return Err(CoreError::InvalidCapacity(format!(
                "container memory {} MiB exceeds task ceiling {} MiB",
                self.container.memory_mib, self.memory_mib
            )));
        }
        Ok(())
    }

    /// Value of the container's `ROLE` environment variable, if set.
    pub fn role_env(&self) -> Option<&str> {
        self.container
            .env
            .iter()
            .find(|e| e.name == "ROLE")
            .map(|e| e.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(cpu: u32, task_mem: u32, container_mem: u32) -> TaskDefinitionSpec {
        TaskDefinitionSpec {
            family: "worker".into(),
            cpu_units: cpu,
            memory_mib: task_mem,
            architecture: CpuArchitecture::Arm64,
            os_family: OsFamily::Linux,
            task_role: LogicalId::from("TaskRole"),
            container: ContainerSpec {
                name: "worker".into(),
                image: ImageAsset {
                    build_context: "src/".into(),
                    asset_name: None,
                    platform: None,
                    command: vec![],
                },
                cpu_units: cpu,
                memory_mib: container_mem,
                logging: LogConfig {
                    stream_prefix: "worker".into(),
                    retention_days: 5,
                },
                env: vec![EnvVar {
                    name: "ROLE".into(),
                    value: "WORKER".into(),
                }],
            },
        }
    }

    #[test]
    fn container_memory_must_fit_task() {
        assert!(task(2048, 8192, 8192).validate().is_ok());
        assert!(task(2048, 4096, 8192).validate().is_err());
        assert!(task(0, 8192, 8192).validate().is_err());
    }

    #[test]
    fn role_env_lookup() {
        assert_eq!(task(2048, 8192, 8192).role_env(), Some("WORKER"));
    }
}
