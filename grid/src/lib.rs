//! Enumerates the submodel parameter grid for a sweep.
//!
//! A sweep is the Cartesian product of:
//! 1. the lead windows fixed by the task's horizon (see [`lead_pairs`]),
//! 2. the configured `last_days`,
//! 3. the configured `margins`,
//! 4. the configured `forecast_with` sources,
//! 5. the configured `debias_with` sources,
//!
//! iterated in that order, outermost first. The order is also the order
//! in which submodels are dispatched, so it must stay stable.

/// Declared dimensions of a sweep
mod config;
pub use config::SweepConfig;

/// Lazy iterator over the grid
mod product;
pub use product::Grid;

use params::Horizon;

/// `(first_lead, last_lead)` windows swept for each horizon, in sweep order.
pub fn lead_pairs(horizon: Horizon) -> &'static [(u32, u32)] {
    match horizon {
        Horizon::W56 => &[(29, 29)],
        Horizon::W34 => &[(29, 29), (0, 29), (15, 22), (15, 15)],
        // no tuning for 12w:
        Horizon::W12 => &[(1, 1)],
    }
}
