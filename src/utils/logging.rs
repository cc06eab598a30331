use log::LevelFilter;

/// Install the process-wide logger.
///
/// Defaults to warnings only; `debug` raises the level so fallbacks
/// (default counter, built-in template, missing git) become visible.
/// `RUST_LOG` still wins when set.
pub(crate) fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
