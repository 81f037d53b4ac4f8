//! Process-wide registry of loggers by name

use std::collections::HashMap;
use std::sync::Arc;

use logkit_auth::SharedCredentials;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::destination::LogDestination;
use super::level::Level;
use super::logger::Logger;
use crate::config::env_log_level;

/// Global registry of named loggers
static REGISTRY: Lazy<RwLock<HashMap<String, Arc<Logger>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Optional construction parameters for `create_logger`
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    pub destination: LogDestination,
    pub project: Option<String>,
    pub credentials: Option<SharedCredentials>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destination(mut self, destination: LogDestination) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_credentials(mut self, credentials: SharedCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Default level for registry-created loggers (`LOGKIT_LOG_LEVEL`, else `Info`)
pub fn default_level() -> Level {
    env_log_level().unwrap_or(Level::Info)
}

/// Get the logger registered under `name`, creating a console logger if needed
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logkit_core::get_logger;
///
/// let a = get_logger("app.db");
/// let b = get_logger("app.db");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn get_logger(name: &str) -> Arc<Logger> {
    if let Some(logger) = REGISTRY.read().get(name) {
        return Arc::clone(logger);
    }

    let mut registry = REGISTRY.write();
    Arc::clone(registry.entry(name.to_string()).or_insert_with(|| {
        let logger = Logger::builder(name).with_level(default_level()).build();
        Arc::new(logger)
    }))
}

/// Build a configured logger and register it under its name
///
/// Replaces any logger previously registered with the same name.
pub fn create_logger(name: &str, level: Level, options: LoggerOptions) -> Arc<Logger> {
    let mut builder = Logger::builder(name)
        .with_destination(options.destination)
        .with_level(level);
    if let Some(project) = options.project {
        builder = builder.with_project(project);
    }
    if let Some(credentials) = options.credentials {
        builder = builder.with_credentials(credentials);
    }

    register_logger(builder.build())
}

/// Register an already-built logger, replacing any previous one with that name
pub fn register_logger(logger: Logger) -> Arc<Logger> {
    let logger = Arc::new(logger);
    REGISTRY
        .write()
        .insert(logger.name().to_string(), Arc::clone(&logger));
    logger
}

pub fn has_logger(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Names of all registered loggers, sorted
pub fn list_loggers() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.read().keys().cloned().collect();
    names.sort();
    names
}

/// Remove a logger from the registry (mainly for testing)
pub fn unregister_logger(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use logkit_auth::AnonymousCredentials;
    use serial_test::serial;
    use crate::config::LOG_LEVEL_ENV;
    use crate::handler::HandlerKind;

    #[test]
    fn test_get_logger_reuses_instance() {
        let first = get_logger("registry.reuse");
        let second = get_logger("registry.reuse");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(has_logger("registry.reuse"));
        assert!(list_loggers().contains(&"registry.reuse".to_string()));

        assert!(unregister_logger("registry.reuse"));
        assert!(!has_logger("registry.reuse"));
        assert!(!unregister_logger("registry.reuse"));
    }

    #[test]
    #[serial]
    fn test_get_logger_level_from_env() {
        let level = temp_env::with_var(LOG_LEVEL_ENV, Some("error"), || {
            let level = get_logger("registry.env_level").level();
            unregister_logger("registry.env_level");
            level
        });
        assert_eq!(level, Level::Error);

        let level = temp_env::with_var_unset(LOG_LEVEL_ENV, || {
            let level = get_logger("registry.env_level").level();
            unregister_logger("registry.env_level");
            level
        });
        assert_eq!(level, Level::Info);
    }

    #[test]
    fn test_create_logger_replaces() {
        let original = get_logger("registry.create");
        let options = LoggerOptions::new()
            .with_destination(LogDestination::CloudBackend)
            .with_project("my-project")
            .with_credentials(Arc::new(AnonymousCredentials::new()));
        let created = create_logger("registry.create", Level::Warning, options);

        assert!(!Arc::ptr_eq(&original, &created));
        assert!(Arc::ptr_eq(&created, &get_logger("registry.create")));
        assert_eq!(created.level(), Level::Warning);
        assert_eq!(created.destination(), LogDestination::CloudBackend);

        unregister_logger("registry.create");
    }

    #[test]
    fn test_register_logger() {
        let logger = register_logger(Logger::new("registry.manual"));
        assert_eq!(logger.handler_kind(), HandlerKind::Console);
        assert!(has_logger("registry.manual"));
        unregister_logger("registry.manual");
    }
}
