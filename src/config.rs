//! Workflow configuration.

use crate::types::OrderId;

/// First id handed out by a fresh store
pub const DEFAULT_FIRST_ORDER_ID: u64 = 1001;

/// Number of catalog books copied into the sorting demo
pub const DEFAULT_SORT_SAMPLE_SIZE: usize = 5;

/// Seed for the performance comparison data
pub const DEFAULT_PERF_SEED: u64 = 42;

/// Settings for a [`crate::Bookstore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookstoreConfig {
    /// Id of the first created order
    pub first_order_id: OrderId,

    /// Load the sample catalog and orders on startup
    pub seed_sample_data: bool,

    /// Books copied from the catalog for the sorting demo
    pub sort_sample_size: usize,

    /// RNG seed for performance comparison data (same seed = same data)
    pub perf_seed: u64,
}

impl Default for BookstoreConfig {
    fn default() -> Self {
        Self {
            first_order_id: OrderId(DEFAULT_FIRST_ORDER_ID),
            seed_sample_data: true,
            sort_sample_size: DEFAULT_SORT_SAMPLE_SIZE,
            perf_seed: DEFAULT_PERF_SEED,
        }
    }
}
