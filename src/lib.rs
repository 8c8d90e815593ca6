#![doc(test(attr(deny(warnings))))]

//! SpendTrail core: the entry store and query engine behind a personal
//! income/expense tracker. Shells own widgets and document layout; this
//! crate owns the data model, ordering and addressing rules, filtering,
//! aggregation, and persistence.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod report;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendTrail core tracing initialized.");
    });
}
