//! Serverless function descriptors.

use serde::{Deserialize, Serialize};

use crate::compute::ImageAsset;
use crate::error::{CoreError, CoreResult};
use crate::ids::LogicalId;

/// Specification for one image-based serverless function.
///
/// The function executes independently of the cluster/task model; it is
/// invoked by an external service and must finish within the declared
/// timeout and memory ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub function_name: String,
    pub code: ImageAsset,
    pub memory_mib: u32,
    pub timeout_secs: u64,
    pub log_retention_days: u16,
    /// Execution role of the function itself.
    pub role: LogicalId,
}

impl FunctionSpec {
    pub fn validate(&self) -> CoreResult<()> {
        if self.function_name.is_empty() {
            return Err(CoreError::EmptyName("function"));
        }
        if self.memory_mib == 0 || self.timeout_secs == 0 {
            return Err(CoreError::InvalidCapacity(format!(
                "function {} must declare non-zero memory and timeout",
                self.function_name
            )));
        }
        Ok(())
    }
}
