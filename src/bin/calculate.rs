use std::fs::File;
use std::io::{stdin, Read};
use std::process::ExitCode;

use atr_riskcheck::calculate_risk_json;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Answer a risk rating request: {"responses":[{"questionId":..,"responseId":..}]}
#[derive(Parser)]
struct Args {
    /// Request file. Reads stdin when omitted.
    path: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut body = String::new();
    let read = match args.path {
        Some(ref path) => File::open(path).and_then(|mut f| f.read_to_string(&mut body)),
        None => stdin().read_to_string(&mut body),
    };
    if let Err(e) = read {
        error!(error = %e, "failed to read request");
        return ExitCode::FAILURE;
    }

    match calculate_risk_json(&body) {
        Ok(reply) => {
            println!("{}", reply);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
