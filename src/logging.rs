//! `log` facade setup.
//!
//! Library code logs through the `log` macros. In the browser, [`init`]
//! routes records to the devtools console; on native targets the host
//! application picks its own logger.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
use log::{Level, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = wasm_bindgen::JsValue::from_str(&format!(
            "[{}] {}",
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger (first call only) and set the max level.
///
/// Later calls only adjust the level, so several plugin instances can each
/// pass their configured level.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    // Fails when a logger is already installed; keep whichever came first.
    log::set_logger(&LOGGER).ok();
    log::set_max_level(level);
}

/// Set the max level for whatever logger the host installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    log::set_max_level(level);
}
