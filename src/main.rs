use clap::Parser;
use orderdesk::adapter::inbound::cli::{self, Cli};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = match cli::load_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.logging.init();
    debug!(config = %args.config.display(), "orderdesk starting");

    match cli::dispatch(args.command, &config).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
