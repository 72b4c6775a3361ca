use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test, only the first call installs
/// the logger.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .format_target(true)
            .format_module_path(false)
            .try_init();
    });
}
