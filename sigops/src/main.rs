mod commands;
mod handlers;
mod output;

use clap::Parser;
use commands::Cli;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so `sample` output stays machine readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = handlers::handle_command(cli) {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}
