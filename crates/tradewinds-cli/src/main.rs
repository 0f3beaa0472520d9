use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "tradewinds",
    about = "Tradewinds — trading-agent infrastructure assembler",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the stack and write the deployable template
    Synth {
        /// Stack configuration file (defaults applied if absent)
        #[arg(short, long, default_value = "tradewinds.toml")]
        config: String,
        /// Output path for the rendered template
        #[arg(short, long, default_value = "template.json")]
        out: String,
    },
    /// Assemble the stack and report advisories without writing anything
    Check {
        #[arg(short, long, default_value = "tradewinds.toml")]
        config: String,
    },
    /// Print a summary of the assembled stack
    Inspect {
        #[arg(short, long, default_value = "tradewinds.toml")]
        config: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tradewinds_assembly=info".parse()?)
                .add_directive("tradewinds_synth=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Synth { config, out } => commands::synth::run(&config, &out),
        Commands::Check { config } => commands::check::run(&config),
        Commands::Inspect { config } => commands::inspect::run(&config),
    }
}
