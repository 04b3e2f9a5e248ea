use anyhow::Result;
use clap::Parser;
use file_runner::FileRunner;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = FileRunner::parse();
    cli.command.execute()
}
