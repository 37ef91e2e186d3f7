mod check_cmd;
mod cli;
mod inspect_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.self_check {
        Some(check) => check_cmd::run(check),
        None => inspect_cmd::run(&cli.input, &cli.data_paths(), cli.format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
