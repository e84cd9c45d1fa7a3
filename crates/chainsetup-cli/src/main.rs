//! chainsetup - configure RPC endpoints for every network the node serves

mod commands;

use clap::Parser;
use commands::Commands;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chainsetup")]
#[command(about = "Discover, validate and record RPC endpoints for node networks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Configure(Default::default()));

    match commands::execute(command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
