//! University Results Command-Line Client
//!
//! Runs one portal query against a local results database and prints it.

mod commands;
mod executor;
mod formatter;

use clap::Parser;
use commands::Command;
use formatter::OutputFormat;
use std::path::PathBuf;
use unires_client::config::DEFAULT_DB_PATH;

/// University Results Command-Line Client
#[derive(Parser, Debug)]
#[command(name = "unires")]
#[command(version, about = "University results command-line client")]
pub struct Args {
    /// Path to the results database
    #[arg(long, env = "UNIRES_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unires_cli=warn,unires_client=warn".into()),
        )
        .init();

    let args = Args::parse();
    let formatter = formatter::create_formatter(args.format);

    let result = async {
        let client = executor::open(&args.db, &args.command).await?;
        let output = executor::execute(&client, &args.command, &*formatter).await;
        client.close();
        output
    }
    .await;

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}
