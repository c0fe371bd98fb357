use crate::LogLevel;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::layer::Context;
use tracing_subscriber::{reload, EnvFilter, Layer, Registry};

const LOG_BUFFER_LIMIT: usize = 10000;

/// Tracing layer copying formatted events into the in-app log buffer
pub struct LogCaptureLayer;

/// Collects the event message and any extra `key=value` fields
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<String>,
}

impl LineVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}

fn level_of(level: &tracing::Level) -> LogLevel {
    match *level {
        tracing::Level::ERROR => LogLevel::Error,
        tracing::Level::WARN => LogLevel::Warn,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::TRACE => LogLevel::Trace,
    }
}

/// `[LEVEL] target: message key=value ..`
pub fn format_line(level: LogLevel, target: &str, message: &str, fields: &[String]) -> String {
    let mut line = format!("[{}] {}: {}", level.label(), target, message);
    for field in fields {
        line.push(' ');
        line.push_str(field);
    }
    line
}

impl<S: Subscriber> Layer<S> for LogCaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = level_of(metadata.level());

        // Skip formatting for lines the buffer would drop anyway
        if !is_captured(level, capture_level()) {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        append_log(
            level,
            format_line(level, metadata.target(), &visitor.message, &visitor.fields),
        );
    }
}

static LOG_BUFFER: OnceLock<Arc<Mutex<String>>> = OnceLock::new();
static CAPTURE_LEVEL: OnceLock<Arc<RwLock<LogLevel>>> = OnceLock::new();
static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

fn log_buffer() -> &'static Arc<Mutex<String>> {
    LOG_BUFFER.get_or_init(|| Arc::new(Mutex::new(String::new())))
}

fn capture_level_lock() -> &'static Arc<RwLock<LogLevel>> {
    CAPTURE_LEVEL.get_or_init(|| Arc::new(RwLock::new(LogLevel::default())))
}

fn capture_level() -> LogLevel {
    capture_level_lock()
        .read()
        .map(|selected| *selected)
        .unwrap_or_default()
}

fn set_capture_level(level: LogLevel) {
    if let Ok(mut selected) = capture_level_lock().write() {
        *selected = level;
    }
}

/// Messages at the selected level and all more severe levels are captured
pub fn is_captured(level: LogLevel, selected: LogLevel) -> bool {
    level.priority() <= selected.priority()
}

/// Appends a line if `level` passes the selected capture level
pub fn append_log(level: LogLevel, line: String) {
    if !is_captured(level, capture_level()) {
        return;
    }

    if let Ok(mut buffer) = log_buffer().lock() {
        buffer.push_str(&line);
        buffer.push('\n');

        if buffer.len() > LOG_BUFFER_LIMIT {
            let mut cut = buffer.len() - LOG_BUFFER_LIMIT;
            while !buffer.is_char_boundary(cut) {
                cut += 1;
            }
            buffer.drain(..cut);
        }
    }
}

pub fn get_logs() -> String {
    log_buffer()
        .lock()
        .map(|buffer| buffer.clone())
        .unwrap_or_default()
}

pub fn clear_logs() {
    if let Ok(mut buffer) = log_buffer().lock() {
        buffer.clear();
    }
}

/// Switches the captured-log filter and, once tracing is installed, the output filter.
pub fn update_log_level(level: LogLevel) {
    set_capture_level(level);

    let Some(handle) = FILTER_HANDLE.get() else {
        return;
    };
    if let Err(e) = handle.reload(EnvFilter::new(level.filter_directive())) {
        eprintln!("Failed to reload log filter: {}", e);
    }
}

/// Installs the tracing subscriber: reloadable env filter, fmt output and log capture.
/// `RUST_LOG` wins over `level` for the initial filter.
pub fn init_tracing(level: LogLevel) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    set_capture_level(level);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));
    let (filter, handle) = reload::Layer::new(env_filter);

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(LogCaptureLayer)
        .try_init()
    {
        eprintln!("Failed to install tracing subscriber: {}", e);
        return;
    }

    let _ = FILTER_HANDLE.set(handle);
}
