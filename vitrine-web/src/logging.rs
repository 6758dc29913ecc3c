//! `tracing` output to the browser console
//!
//! Events are formatted by the fmt subscriber and routed to `console.error`,
//! `console.warn`, `console.info` or `console.debug` by level.

use tracing::Level;
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber and the panic hook. Later calls are no-ops.
pub fn init(level: Level) {
    console_error_panic_hook::set_once();

    let _ = tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init();
}
