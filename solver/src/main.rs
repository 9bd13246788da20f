use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use circuitous::{DistanceRecord, NetworkBuilder};
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Find the shortest and longest routes visiting every location in a distance list exactly once.
#[derive(Parser)]
#[command(name = "solver")]
struct Cmd {
    /// File of `<from> to <to> = <distance>` lines, one segment per line
    input: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let raw = fs::read_to_string(&cmd.input)
        .with_context(|| format!("reading {}", cmd.input.display()))?;

    let mut builder = NetworkBuilder::default();
    for line in raw.lines().filter(|line| !line.trim().is_empty()) {
        let record: DistanceRecord = line.parse()
            .with_context(|| format!("parsing `{line}`"))?;
        builder.add_record(&record);
    }

    let network = match builder.build() {
        Ok(network) => network,
        Err(reasons) => bail!("invalid distance list: {reasons:?}"),
    };

    match network.extremes() {
        Some(extremes) => {
            println!("shortest: {} ({})", network.describe(&extremes.shortest), extremes.shortest.total());
            println!("longest:  {} ({})", network.describe(&extremes.longest), extremes.longest.total());
        }
        None => println!("no route visits every location exactly once"),
    }

    Ok(())
}
