use tradewinds_assembly::assemble;

pub fn run(config_path: &str) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let stack = assemble(&config)?;

    println!("Stack: {} resources, {} grants", stack.len(), stack.grants().count());

    for (id, network) in stack.networks() {
        println!(
            "  network {id}: {} across {} zones, {} NAT",
            network.cidr, network.max_azs, network.nat_gateways
        );
    }
    for (id, task) in stack.task_definitions() {
        println!(
            "  task {id}: {} cpu, {} MiB, role {}",
            task.cpu_units,
            task.memory_mib,
            task.role_env().unwrap_or("-")
        );
    }
    for (id, rule) in stack.schedule_rules() {
        println!(
            "  schedule {id}: {} -> {}",
            rule.cron.expression(),
            rule.target.task
        );
    }
    for (id, table) in stack.tables() {
        println!(
            "  table {id}: {}/{} keys, deletion protection {}",
            table.partition_key.name,
            table.sort_key.name,
            if table.deletion_protection { "on" } else { "off" }
        );
    }
    for (id, function) in stack.functions() {
        println!(
            "  function {id}: {} MiB, {}s timeout",
            function.memory_mib, function.timeout_secs
        );
    }
    Ok(())
}
