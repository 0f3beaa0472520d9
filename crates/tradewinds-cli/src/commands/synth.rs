use std::fs;
use std::path::Path;

use anyhow::Context;

use tradewinds_assembly::{assemble, lint};
use tradewinds_synth::synthesize;

pub fn run(config_path: &str, out_path: &str) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let stack = assemble(&config)?;
    lint(&stack);

    let template = synthesize(&stack)?;
    let rendered = template.to_json_pretty()?;
    fs::write(Path::new(out_path), rendered)
        .with_context(|| format!("writing {out_path}"))?;

    println!("✓ Synthesized {} resources", stack.len());
    println!("  Output: {out_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tradewinds_synth::Template;

    #[test]
    fn synth_writes_a_parseable_template() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("template.json");
        let missing_config = dir.path().join("tradewinds.toml");

        super::run(
            missing_config.to_str().unwrap(),
            out.to_str().unwrap(),
        )
        .unwrap();

        let rendered = std::fs::read_to_string(&out).unwrap();
        let template: Template = serde_json::from_str(&rendered).unwrap();
        assert!(template.resources.contains_key("Cluster"));
    }
}
