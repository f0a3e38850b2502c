//! `tracing` output for the browser.
//!
//! The fmt subscriber formats each event into a [`ConsoleWriter`], which hands
//! the finished line to the matching `console.*` method on flush.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Default maximum level; override with `STYLIST_LOG_LEVEL` at build time.
const DEFAULT_LEVEL: Level = Level::INFO;

pub fn init() {
    let level = option_env!("STYLIST_LOG_LEVEL")
        .and_then(|raw| raw.parse::<Level>().ok())
        .unwrap_or(DEFAULT_LEVEL);

    let result = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if result.is_err() {
        web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}

#[derive(Debug, Clone, Copy)]
struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_owned();
        self.buf.clear();
        (!line.is_empty()).then_some(line)
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            let line = JsValue::from_str(&line);
            if self.level == Level::ERROR {
                web_sys::console::error_1(&line);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&line);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&line);
            } else {
                web_sys::console::debug_1(&line);
            }
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn take_line_trims_and_drains() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b" INFO contact request accepted\n").unwrap();

        assert_eq!(
            writer.take_line().as_deref(),
            Some(" INFO contact request accepted")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn blank_output_is_not_a_line() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"\n\n").unwrap();

        assert_eq!(writer.take_line(), None);
    }
}
