//! Notification sink for command outcomes

use cinerig_core::Result;

/// Where command outcomes go: the host's info/error reporting surface
pub trait Notifier {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Notifier that prints to stdout/stderr
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Forward a command result to the sink. Returns whether the command
/// succeeded; the error itself is consumed here, at the command boundary.
pub fn report(notifier: &mut dyn Notifier, result: Result<String>) -> bool {
    match result {
        Ok(message) => {
            notifier.info(&message);
            true
        }
        Err(err) => {
            notifier.error(&err.to_string());
            false
        }
    }
}
