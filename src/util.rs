use std::sync::LazyLock;

use crate::error::Result;

pub fn time<T>(t: &str, f: impl FnOnce() -> T) -> T {
    log::info!("{t}: Starting");
    let start = std::time::Instant::now();
    let r = f();
    let elapsed = start.elapsed();
    log::info!("{t}: Elapsed: {:?}", elapsed);
    r
}

/// Log to stderr. Verbosity 0 shows errors only, 1 adds warnings, 2 info, 3 debug.
pub fn init_logging(verbosity: usize, quiet: bool) -> Result<()> {
    stderrlog::new()
        .color(stderrlog::ColorChoice::Auto)
        .verbosity(verbosity)
        .quiet(quiet)
        .show_level(true)
        .init()?;
    Ok(())
}

fn init_trace() {
    // Another logger may already be installed, e.g. by a test harness.
    let _ = init_logging(3, false);
}

pub static INIT_TRACE: LazyLock<()> = LazyLock::new(init_trace);
