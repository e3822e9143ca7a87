use atr_riskcheck::{read_bulk, Error};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Score answer sheets from a CSV file (id, q1..q13)
#[derive(Parser)]
struct Args {
    path: String,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let reader = BufReader::new(File::open(&args.path)?);
    for (line, row) in read_bulk(reader).enumerate() {
        match row {
            Ok((id, store)) => match store.to_rating() {
                Ok(rating) => {
                    println!(
                        "id = {}, rating = {}, label = {}",
                        id,
                        rating.value(),
                        rating.label()
                    );
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "skipped answer sheet");
                }
            },
            Err(e) => {
                warn!(row = line + 1, error = %e, "unreadable answer sheet");
            }
        }
    }
    Ok(())
}
