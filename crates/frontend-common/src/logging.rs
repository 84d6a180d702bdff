//! Console logging for the browser build

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `log` and `tracing` events to the browser console.
///
/// Call once from the application entrypoint, before the first API call.
pub fn init() {
    wasm_logger::init(wasm_logger::Config::default());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();
}
