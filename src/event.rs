//! Event and log callback system.
//!
//! The library never prints on its own. Hosts that want diagnostics install a
//! log callback; hosts that want to observe session changes install an event
//! callback.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name used by the CLI log sink.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(guard) = event_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, data);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Serializes unit tests that install global callbacks.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_event_callback() {
        let _lock = test_lock();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        set_event_callback(move |name, data| {
            seen_clone
                .lock()
                .unwrap()
                .push((name.to_string(), data.to_string()));
        });
        emit_event("test", "{}");
        clear_event_callback();
        emit_event("after_clear", "{}");

        let seen = seen.lock().unwrap();
        assert!(seen.contains(&("test".to_string(), "{}".to_string())));
        assert!(!seen.iter().any(|(name, _)| name == "after_clear"));
    }

    #[test]
    fn test_log_callback() {
        let _lock = test_lock();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        set_log_callback(move |level, msg| {
            seen_clone.lock().unwrap().push((level, msg.to_string()));
        });
        emit_log(LogLevel::Info, "hello");
        clear_log_callback();

        let seen = seen.lock().unwrap();
        assert!(seen.contains(&(LogLevel::Info, "hello".to_string())));
    }

    #[test]
    fn test_emit_without_callback_is_noop() {
        let _lock = test_lock();
        clear_log_callback();
        clear_event_callback();
        emit_log(LogLevel::Error, "nobody listening");
        emit_event("nobody", "listening");
    }

    #[test]
    fn test_log_level_ordering_and_names() {
        assert!(LogLevel::Debug < LogLevel::Error);
        assert_eq!(LogLevel::Warn.as_str(), "warn");
    }
}
