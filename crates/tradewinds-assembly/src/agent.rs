//! Search function and agent-permission assembly.
//!
//! Declares the image-based search function, the invocation permission
//! for the model-invocation service, the function role's self-update
//! statement, and the agent role scoped to one foundation model. Nothing
//! here touches the network/compute or storage assemblers.

use tradewinds_core::{
    CoreResult, FunctionSpec, ImageAsset, ImagePlatform, LogicalId, Permission,
    PolicyStatement, Resource, RoleSpec, ServicePrincipal, Stack,
};

use crate::config::StackConfig;
use crate::network_compute::LOG_RETENTION_DAYS;

const FUNCTION_NAME: &str = "BedrockAgentInternetSearch";
const FUNCTION_MEMORY_MIB: u32 = 4048;
const FUNCTION_TIMEOUT_SECS: u64 = 600;
/// Service allowed to invoke the function and assume the agent role.
const MODEL_SERVICE: &str = "bedrock.amazonaws.com";

/// Declare the search function and the roles/permissions around it.
pub fn assemble_agent(config: &StackConfig, stack: &mut Stack) -> CoreResult<()> {
    let function_role = LogicalId::from("InternetSearchFunctionRole");
    let function_arn = format!(
        "arn:aws:lambda:{}:{}:function:{FUNCTION_NAME}",
        config.region, config.account
    );
    stack.insert(
        function_role.clone(),
        Resource::Role(RoleSpec {
            name: "InternetSearchFunctionRole".to_string(),
            assumed_by: ServicePrincipal::new("lambda.amazonaws.com"),
            managed_policies: vec![],
            // The function reconfigures itself after agent deployment.
            inline_statements: vec![PolicyStatement::allow(
                &["lambda:UpdateFunctionConfiguration"],
                &[&function_arn],
            )],
        }),
    )?;

    let function = LogicalId::from(FUNCTION_NAME);
    stack.insert(
        function.clone(),
        Resource::Function(FunctionSpec {
            function_name: FUNCTION_NAME.to_string(),
            code: ImageAsset {
                build_context: config.lambda_build_context.clone(),
                asset_name: None,
                platform: Some(ImagePlatform::LinuxAmd64),
                command: vec!["internet_search.lambda_handler".to_string()],
            },
            memory_mib: FUNCTION_MEMORY_MIB,
            timeout_secs: FUNCTION_TIMEOUT_SECS,
            log_retention_days: LOG_RETENTION_DAYS,
            role: function_role,
        }),
    )?;

    stack.insert(
        LogicalId::from("PermitBedrockInvoke"),
        Resource::Permission(Permission {
            function,
            principal: ServicePrincipal::new(MODEL_SERVICE),
            action: "lambda:InvokeFunction".to_string(),
        }),
    )?;

    let model_arn = format!(
        "arn:aws:bedrock:{}::foundation-model/{}",
        config.region, config.foundation_model
    );
    stack.insert(
        LogicalId::from("BedrockAgentRole"),
        Resource::Role(RoleSpec {
            name: "BedrockAgentRole".to_string(),
            assumed_by: ServicePrincipal::new(MODEL_SERVICE),
            managed_policies: vec![],
            inline_statements: vec![PolicyStatement::allow(
                &["bedrock:InvokeModel"],
                &[&model_arn],
            )],
        }),
    )?;

    Ok(())
}
