//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Environment variable that overrides [`API_URL`]
pub const API_URL_VAR: &str = "PLANNER_API_URL";
/// Environment variable that holds the session ID used by the `planner` binary
pub const SESSION_VAR: &str = "PLANNER_SID";

/// The GraphQL endpoint used when none is given explicitly.
/// It is read from the `PLANNER_API_URL` environment variable the first time it is used. Feel free to override it when initing this library.
pub static API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| {
    let url = std::env::var(API_URL_VAR).unwrap_or_else(|_| "http://localhost:8080/query".to_string());
    Arc::new(Mutex::new(url))
});

/// Shown once a new title has been saved
pub static TITLE_SAVED_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Veranstaltungstitel erfolgreich angepasst!".to_string())));

/// Shown once a new date range has been saved
pub static RANGE_SAVED_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Veranstaltungsdauer erfolgreich angepasst!".to_string())));

/// Prefix of the message shown when a request failed. The error itself is appended to it.
pub static SAVE_FAILED_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Speichern fehlgeschlagen".to_string())));

/// Prefix of the message shown when an event could not be loaded
pub static LOAD_FAILED_MESSAGE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Veranstaltung konnte nicht geladen werden".to_string())));

/// Read the current value of a configuration string
pub fn get(option: &Lazy<Arc<Mutex<String>>>) -> String {
    match option.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Override a configuration string
pub fn set<S: ToString>(option: &Lazy<Arc<Mutex<String>>>, value: S) {
    match option.lock() {
        Ok(mut current) => *current = value.to_string(),
        Err(poisoned) => *poisoned.into_inner() = value.to_string(),
    }
}
