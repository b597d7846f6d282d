//! fern-based logger setup.
//!
//! Called automatically by the runner; apps that want a custom dispatch can
//! call [`init`] themselves before `App::run` — the runner's call then
//! becomes a no-op.

/// Installs a stdout logger at `level`.
///
/// Does nothing if a global logger is already installed, so callers don't
/// have to care whether they or the runner got there first.
pub fn init(level: log::LevelFilter) {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // wgpu is chatty at Info during setup; keep it to warnings.
        .level_for("wgpu_core", log::LevelFilter::Warn)
        .level_for("wgpu_hal", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply();

    // A second apply() means someone installed a logger first; fine.
    if result.is_err() {
        log::debug!("global logger already installed, keeping it");
    }
}
