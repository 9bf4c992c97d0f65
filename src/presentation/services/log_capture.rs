use anyhow::Result;
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber: stderr output plus a layer forwarding this
/// crate's events to the UI log panel. Call exactly once.
pub fn init_log_capture() -> Result<Receiver<String>> {
    let (tx, rx) = channel();

    let capture_layer = CaptureLayer { sender: tx };

    #[cfg(debug_assertions)]
    let filter = LevelFilter::TRACE;

    #[cfg(not(debug_assertions))]
    let filter = LevelFilter::DEBUG;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_filter(LevelFilter::INFO))
        .with(capture_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("log capture already initialized: {}", e))?;

    Ok(rx)
}

struct CaptureLayer {
    sender: Sender<String>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("station_alarm") {
            return;
        }

        let level = *metadata.level();

        let mut visitor = LogVisitor {
            message: String::new(),
        };

        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            let log_entry = format!("[{}] {}", level, visitor.message);
            let _ = self.sender.send(log_entry);
        }
    }
}

struct LogVisitor {
    message: String,
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}
