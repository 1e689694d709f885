use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info};

use priority_store::collections::heap::{BoundedPriorityStore, EmptyContainer, left, parent, right};

/// Walks through the operations of a BoundedPriorityStore, printing the store after each step.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Values used to build the initial store, inserted in order.
    #[arg(default_values_t = [4, 2, 6, 1, 5], allow_negative_numbers = true)]
    values: Vec<i64>,

    /// A value inserted after the store is built.
    #[arg(short, long, default_value_t = 3)]
    insert: i64,

    /// An index whose children and parent are printed.
    #[arg(long, default_value_t = 1)]
    index: usize,

    /// Increase logging verbosity (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), EmptyContainer> {
    let index = cli.index;
    match left(index) {
        Some(l) => println!("Left Child of {index}: {l}"),
        None => println!("Left Child of {index}: none (index overflows)"),
    }
    match right(index) {
        Some(r) => println!("Right Child of {index}: {r}"),
        None => println!("Right Child of {index}: none (index overflows)"),
    }
    match parent(index) {
        Some(p) => println!("Parent of {index}: {p}"),
        None => println!("Parent of {index}: none (root)"),
    }

    let mut store = BoundedPriorityStore::new_from(cli.values.iter().copied());
    println!("BoundedPriorityStore: {store}");

    store.insert(cli.insert);
    info!("inserted {}", cli.insert);
    println!("BoundedPriorityStore: {store}");

    println!("{}", store.peek_max()?);
    let max = store.extract_max()?;
    info!("extracted {max}");
    println!("BoundedPriorityStore: {store}");

    Ok(())
}
