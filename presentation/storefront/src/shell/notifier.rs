use business::domain::notifier::{Notification, Notifier, Severity};

/// Prints notifications to the terminal, one line each.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notification: &Notification) -> String {
        let marker = match notification.severity {
            Severity::Info => "*",
            Severity::Destructive => "!",
        };
        format!(
            "{} {}: {}",
            marker, notification.title, notification.description
        )
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::debug!(severity = %notification.severity, title = %notification.title, "notification");
        println!("{}", Self::format(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mark_destructive_notifications() {
        let line = ConsoleNotifier::format(&Notification::destructive(
            "Out of stock",
            "Mystery Novel: The Silent Witness is currently out of stock.",
        ));

        assert_eq!(
            line,
            "! Out of stock: Mystery Novel: The Silent Witness is currently out of stock."
        );
    }

    #[test]
    fn should_mark_info_notifications() {
        let line = ConsoleNotifier::format(&Notification::info(
            "Item removed",
            "Item removed from cart.",
        ));

        assert_eq!(line, "* Item removed: Item removed from cart.");
    }
}
