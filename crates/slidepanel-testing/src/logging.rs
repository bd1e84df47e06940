/// Routes `log` output through the test harness' captured stdout.
///
/// Safe to call from every test; only the first call installs the logger.
/// Honors `RUST_LOG`.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
