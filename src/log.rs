use log::LevelFilter;

/// Environment variable that turns on debug logging, like `--debug`.
pub const DEBUG_ENV_VAR: &str = "CROSSPRINT_DEBUG";

/// Initialize logging for the command line tool.
///
/// # Behavior
/// - Logs at `Info` level, or `Debug` when `debug_enabled` is true.
/// - `RUST_LOG`, if set, overrides these defaults.
/// - Messages go to stderr without timestamps, module paths or targets.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second call (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
