use bitkit::{
    replay::{Step, fill_random, reference_scenario, replay},
    set::BitSet,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Replays bit set operations and prints the set after every step
#[derive(Parser, Debug)]
#[command(name = "bitkit")]
#[command(about = "Replays rotate/shift/flip operations on a packed bit set", long_about = None)]
struct Args {
    /// Number of bits in the set
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Fill the set with seeded random bits before replaying
    #[arg(short, long)]
    random: Option<u64>,

    /// Print one JSON object per step instead of plain text
    #[arg(long)]
    json: bool,

    /// Operations to apply, e.g. "set:0 flip:1 rotr:1 shl:2". Defaults to the reference walkthrough
    steps: Vec<Step>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut bitset = BitSet::new(args.length)?;
    if let Some(seed) = args.random {
        fill_random(&mut bitset, seed)?;
    }

    let steps = if args.steps.is_empty() {
        reference_scenario()
    } else {
        args.steps
    };

    if !args.json {
        println!("start: {bitset}");
    }

    for record in replay(&mut bitset, &steps) {
        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else if let Some(error) = &record.error {
            println!("{}: {} (failed: {error})", record.step, record.bits);
        } else {
            println!("{}: {}", record.step, record.bits);
        }
    }

    BitSet::destroy(Some(bitset));
    Ok(())
}
