/// Installs the `env_logger` backend for the `log` facade.
///
/// `RUST_LOG` still takes precedence over the level picked here.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();
}
