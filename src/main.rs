use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use hostel_booking::{BookingService, Console, HostelBookingSystem, HostelConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Room booking desk for a small hostel", long_about = None)]
struct Args {
    /// Number of floors in the hostel
    #[arg(long, default_value_t = 2)]
    floors: usize,

    /// Number of rooms on every floor
    #[arg(long, default_value_t = 5)]
    rooms_per_floor: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, short, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log level \"{}\"", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = HostelConfig {
        floors: args.floors,
        rooms_per_floor: args.rooms_per_floor,
    };
    config.validate().context("invalid hostel layout")?;
    info!(floors = config.floors, rooms_per_floor = config.rooms_per_floor, "hostel opened");

    let stdin = io::stdin();
    let mut console = Console::new(HostelBookingSystem::new(config), stdin.lock(), io::stdout());
    console.run().context("booking console failed")?;

    info!(stats = ?console.service().stats(), "hostel closed");
    Ok(())
}
