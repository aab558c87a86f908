//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber used by every
//! binary built on this framework.
//!
//! The run loop of each [`StateActor`](crate::StateActor) logs with an
//! `actor` field instead of a module path, so the output hides targets and
//! stays compact:
//!
//! ```text
//! INFO Actor started actor="OrderDesk"
//! INFO place_order: Order placed order_id=1 lines=2 total=500.0
//! INFO Shutdown actor="OrderDesk" handled=12
//! ```
//!
//! Verbosity comes from `RUST_LOG` and defaults to `info`:
//!
//! ```bash
//! RUST_LOG=debug cargo run   # includes every request payload
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
