use clap::Parser;
use lexid::{MonotonicClock, TimeSource, Ulid};

/// Generate ULIDs: 128-bit lexicographically sortable identifiers.
#[derive(Debug, Parser)]
#[command(name = "lexid", about)]
struct Cli {
    /// Number of identifiers to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Encode this millisecond timestamp instead of reading the clock.
    #[arg(long)]
    timestamp: Option<u64>,

    /// Fill every entropy byte with a fixed value (deterministic output).
    #[arg(long, value_name = "BYTE", conflicts_with = "secure")]
    constant: Option<u8>,

    /// Fill the entropy bytes from the OS secure random source.
    #[arg(long)]
    secure: bool,
}

fn main() {
    let cli = Cli::parse();
    let clock = MonotonicClock::new();

    for _ in 0..cli.count {
        let timestamp = cli.timestamp.unwrap_or_else(|| clock.current_millis());
        let id = if let Some(value) = cli.constant {
            Ulid::from_timestamp_const(timestamp, value)
        } else if cli.secure {
            Ulid::from_timestamp_secure(timestamp)
        } else {
            Ulid::from_timestamp(timestamp)
        };
        println!("{id}");
    }
}
