//! Structured logging utilities.
//!
//! Provides context-aware logging with request_id and record type included
//! in every log message.

use std::fmt;

use uuid::Uuid;

/// Logging context for a single describe/validate request.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub request_id: String,
    pub record_type: Option<String>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            record_type: None,
        }
    }

    /// Create a context with a fresh `req-xxxxxxxx` id.
    pub fn generate() -> Self {
        Self::new(&format!("req-{}", &Uuid::new_v4().to_string()[..8]))
    }

    pub fn with_type(&self, record_type: &str) -> Self {
        Self {
            request_id: self.request_id.clone(),
            record_type: Some(record_type.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_type {
            Some(t) => write!(f, "[request={}] [type={}]", self.request_id, t),
            None => write!(f, "[request={}]", self.request_id),
        }
    }
}

/// Log an info message with context.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::info!(
            concat!("{} {}", $(" ", stringify!($key), "={:?}"),*),
            $ctx,
            $event
            $(, $value)*
        );
    };
}

/// Log a warning message with context.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::warn!(
            concat!("{} {}", $(" ", stringify!($key), "={:?}"),*),
            $ctx,
            $event
            $(, $value)*
        );
    };
}

/// Log a debug message with context.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::debug!(
            concat!("{} {}", $(" ", stringify!($key), "={:?}"),*),
            $ctx,
            $event
            $(, $value)*
        );
    };
}
