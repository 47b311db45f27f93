mod capacity;
mod codec;
mod properties;
mod remove;

/// Routes log events to the test harness; `RUST_LOG=advance_store=trace` shows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
