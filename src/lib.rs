#![doc(test(attr(deny(warnings))))]

//! Budget Buddy keeps a session ledger of income and categorized expenses,
//! derives running totals from it, and ships a small shell to drive it.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::core::{LedgerStore, SharedLedgerStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Buddy tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_can_run_twice() {
        super::init();
        super::init();
    }
}
