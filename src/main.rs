use captureorder::adapter::inbound::cli::command::{Cli, Commands};
use captureorder::adapter::inbound::cli::{check, submit};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Submit(args) => submit::execute(args).await,
        Commands::Check(args) => check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
