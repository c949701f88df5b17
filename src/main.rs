use tempus::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logging is opt-in via RUST_LOG; the message macros fall back to plain
    // console output when no filter is configured.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Cli::menu()
}
