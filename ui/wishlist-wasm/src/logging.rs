//! `tracing` output routed to the browser console through `tracing-wasm`,
//! filtered by the page's `log_filter` directive.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the global subscriber. An invalid filter falls back to `info`;
/// a second call is a no-op.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        gloo_console::warn!(format!("invalid log filter {:?}: {}", filter, err));
        EnvFilter::new("info")
    });

    // Span timings go to the Performance panel, not the console.
    let console = WASMLayerConfigBuilder::new()
        .set_report_logs_in_timings(false)
        .build();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(WASMLayer::new(console))
        .try_init();
}
