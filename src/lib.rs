#![doc(test(attr(deny(warnings))))]

//! Interview form core: five validated text fields, a submit action that
//! hands the collected record to a host notification, and a terminal shell
//! that drives it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Interview form tracing initialized.");
    });
}
