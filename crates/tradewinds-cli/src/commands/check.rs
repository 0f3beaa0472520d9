use tradewinds_assembly::{assemble, lint};
use tradewinds_synth::check_references;

pub fn run(config_path: &str) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let stack = assemble(&config)?;
    check_references(&stack)?;

    let findings = lint(&stack);
    if findings.is_empty() {
        println!("✓ Stack is clean ({} resources)", stack.len());
    } else {
        println!(
            "✓ Stack is valid, {} advisor{}:",
            findings.len(),
            if findings.len() == 1 { "y" } else { "ies" }
        );
        for finding in &findings {
            println!("  ⚠ {finding}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_passes_on_defaults() {
        // Path does not exist, so defaults are used.
        super::run("does-not-exist.toml").unwrap();
    }
}
