//! Bookstore Orders - console entry point.
//!
//! Parses flags, installs logging on stderr, and hands stdin/stdout to the
//! interactive menu.

mod menu;

use std::io;

use clap::Parser;
use tracing::Level;

use bookstore_orders::config::{
    DEFAULT_FIRST_ORDER_ID, DEFAULT_PERF_SEED, DEFAULT_SORT_SAMPLE_SIZE,
};
use bookstore_orders::{Bookstore, BookstoreConfig, OrderId};

use crate::menu::Menu;

/// Online bookstore order processing system
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Id assigned to the first order
    #[arg(long, default_value_t = DEFAULT_FIRST_ORDER_ID)]
    first_order_id: u64,

    /// Start with an empty catalog and no orders
    #[arg(long)]
    no_sample_data: bool,

    /// Catalog books copied into the sorting demo
    #[arg(long, default_value_t = DEFAULT_SORT_SAMPLE_SIZE)]
    sort_sample_size: usize,

    /// Seed for performance comparison data
    #[arg(long, default_value_t = DEFAULT_PERF_SEED)]
    perf_seed: u64,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

impl Cli {
    fn config(&self) -> BookstoreConfig {
        BookstoreConfig {
            first_order_id: OrderId(self.first_order_id),
            seed_sample_data: !self.no_sample_data,
            sort_sample_size: self.sort_sample_size,
            perf_seed: self.perf_seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let mut bookstore = Bookstore::new(cli.config());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut bookstore, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
