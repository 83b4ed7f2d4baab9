use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

/// The `#[traced_test]` decorator filters out events from `kernel_hints`
/// in integration tests, since each test file is its own crate. Call this at
/// the start of a test instead.
///
/// Only one global default subscriber can exist per process; later calls
/// are no-ops.
pub fn tracing_logger() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("self=trace,kernel_hints=debug"));
    let subscriber = FmtSubscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(env_filter)
        .with_thread_ids(true)
        .with_test_writer()
        .finish();

    let _result = tracing::subscriber::set_global_default(subscriber);
}
