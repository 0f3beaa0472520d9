pub mod check;
pub mod inspect;
pub mod synth;

use std::path::Path;

use anyhow::Context;
use tracing::info;

use tradewinds_assembly::StackConfig;

/// Load the config file, or fall back to defaults when it is absent.
pub fn load_config(path: &str) -> anyhow::Result<StackConfig> {
    let path = Path::new(path);
    if path.exists() {
        StackConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))
    } else {
        info!(path = %path.display(), "no config file, using defaults");
        Ok(StackConfig::default())
    }
}
