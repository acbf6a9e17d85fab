//! Logging middleware
//!
//! Observes every dispatched action, pairing it with the pre-dispatch state,
//! and unconditionally forwards it. The record goes to the `log` facade; the
//! formatting and destination belong to whatever logger the host installs.

use std::fmt;

use pawl_core::{Middleware, MiddlewareContext};
use serde::{Deserialize, Serialize};

/// Log level for the action records, mapped onto the `log` facade's levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Configuration for [`LoggingMiddleware`], loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Level the action records are emitted at
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Whether to include the pre-dispatch state snapshot in each record
    #[serde(default = "default_include_state")]
    pub include_state: bool,

    /// Log target the records are tagged with
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_level() -> LogLevel {
    LogLevel::Debug
}

fn default_include_state() -> bool {
    true
}

fn default_target() -> String {
    "pawl".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            include_state: default_include_state(),
            target: default_target(),
        }
    }
}

/// Middleware that logs every action passing through the pipeline.
///
/// Purely an observer: it never mutates state and never blocks the chain.
pub struct LoggingMiddleware {
    config: LoggerConfig,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    pub fn with_config(config: LoggerConfig) -> Self {
        Self { config }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug, A: fmt::Debug> Middleware<S, A> for LoggingMiddleware {
    fn handle(&self, ctx: &MiddlewareContext<S, A>, action: A, next: &dyn Fn(A)) {
        let level = self.config.level.to_level();
        let target = self.config.target.as_str();
        if self.config.include_state {
            log::log!(target: target, level, "action: {:?} (state: {:?})", action, ctx.state());
        } else {
            log::log!(target: target, level, "action: {:?}", action);
        }
        next(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawl_core::{apply_middleware, FnReducer, Store};

    #[derive(Debug)]
    enum Action {
        Add,
    }

    fn new_store() -> Store<i32, Action> {
        let counter = FnReducer::new(10, |s: i32, a: &Action| match a {
            Action::Add => s + 1,
        });
        Store::with_enhancer(
            Box::new(counter),
            apply_middleware(vec![Box::new(LoggingMiddleware::new())]),
        )
    }

    #[test]
    fn test_logger_forwards_unconditionally() {
        let store = new_store();
        store.dispatch(Action::Add);
        store.dispatch(Action::Add);
        assert_eq!(store.state(), 12);
    }

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.include_state);
        assert_eq!(config.target, "pawl");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            level = "info"
            include_state = false
            target = "my-app"
        "#;
        let config: LoggerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.level, LogLevel::Info);
        assert!(!config.include_state);
        assert_eq!(config.target, "my-app");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            level = "trace"
        "#;
        let config: LoggerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.level, LogLevel::Trace);
        // Other fields use defaults
        assert!(config.include_state);
        assert_eq!(config.target, "pawl");
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(LogLevel::Error.to_level(), log::Level::Error);
        assert_eq!(LogLevel::Warn.to_level(), log::Level::Warn);
        assert_eq!(LogLevel::Info.to_level(), log::Level::Info);
        assert_eq!(LogLevel::Debug.to_level(), log::Level::Debug);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }
}
