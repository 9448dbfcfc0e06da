//! Routes `tracing` output into the browser console.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

struct Console;

struct ConsoleWriter {
    level: tracing::Level,
}

impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let message = String::from_utf8_lossy(buf);
        let message = message.trim_end();

        match self.level {
            tracing::Level::ERROR => leptos_dom::logging::console_error(message),
            tracing::Level::WARN => leptos_dom::logging::console_warn(message),
            _ => leptos_dom::logging::console_log(message),
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: tracing::Level::INFO,
        }
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
        }
    }
}

pub fn init() {
    // No clock on wasm32-unknown-unknown, so no timestamps.
    let registry = tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(Console),
        )
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().starts_with("client") || meta.target().starts_with("frontend")
        }));

    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        leptos_dom::logging::console_error(&format!("Installing tracing subscriber: {:?}", e));
    }
}
