#![doc(test(attr(deny(warnings))))]

//! Finance Report Core turns raw school fee and expense records into the
//! aggregated projections behind the financial reports: fee collection,
//! expenses, income statement, outstanding fees, student balances, and
//! single-payment receipts. Rendering back ends (paginated documents,
//! spreadsheets) plug in through the traits in [`render`].

pub mod errors;
pub mod export;
pub mod formatting;
pub mod records;
pub mod render;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Report Core tracing initialized.");
    });
}
