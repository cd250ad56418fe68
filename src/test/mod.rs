
/// Sends log output to the terminal for tests. Only warnings and errors are shown.
pub(crate) fn init_logging() {
    use simplelog::*;

    // Every test calls this; only the first one gets to install the logger.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
