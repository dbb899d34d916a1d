use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tag_schema::check::{self, PayloadKind};
use tag_schema::config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tag-schema", about = "Check tag API payloads against their schemas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a JSON payload and print its response envelope
    Check {
        kind: PayloadKind,
        /// File to read, or `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}

fn read_input(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

fn main() -> ExitCode {
    // .env may carry RUST_LOG, so it is loaded before the filter is built
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Check { kind, file } => {
            let input = match read_input(&file) {
                Ok(input) => input,
                Err(e) => {
                    tracing::error!("failed to read {}: {e}", file.display());
                    return ExitCode::from(2);
                }
            };

            let report = check::report(kind, &input, &config.rules);
            let out = if config.pretty {
                serde_json::to_string_pretty(&report.body)
            } else {
                serde_json::to_string(&report.body)
            };
            match out {
                Ok(out) => println!("{out}"),
                Err(e) => {
                    tracing::error!("failed to encode output: {e}");
                    return ExitCode::from(2);
                }
            }

            if report.accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
