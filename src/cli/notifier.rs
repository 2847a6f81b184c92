//! Terminal rendering of notifications

use colored::Colorize;

use crate::notify::{Notification, NotificationKind, Notifier};

/// Prints notifications to stderr so stdout stays machine-readable.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                eprintln!("{} {}", "✓".green(), notification.message.green())
            }
            NotificationKind::Error => eprintln!("{} {}", "✗".red(), notification.message.red()),
        }
    }

    fn alert(&self, message: &str) {
        eprintln!();
        eprintln!("{}", "Request blocked".bold().red());
        eprintln!("{}", message.yellow());
        eprintln!();
    }
}
