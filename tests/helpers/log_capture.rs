use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Records the level and message of every event it sees
#[derive(Clone, Default)]
pub struct LogCapture {
    logs: Arc<Mutex<Vec<(Level, String)>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self) -> Self {
        self.clone()
    }

    pub fn contains(&self, level: Level, pattern: &str) -> bool {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(pattern))
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logs
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.message));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}
