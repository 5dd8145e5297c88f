//! Output format selection and notification rendering.

use crosspost::{Mutation, SessionStore, store::NotificationStyle};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print every pending notification to stderr and dismiss it.
///
/// Returns true if any error notification was shown.
pub fn flush_notifications(store: &SessionStore, format: OutputFormat) -> bool {
    let mut saw_error = false;

    while let Some(notification) = store.notifications().into_iter().next() {
        saw_error |= notification.style == NotificationStyle::Error;
        match format {
            OutputFormat::Human => eprintln!("{}: {}", notification.style, notification.text),
            OutputFormat::Json => match serde_json::to_string(&notification) {
                Ok(line) => eprintln!("{line}"),
                Err(_) => eprintln!("{}: {}", notification.style, notification.text),
            },
        }
        store.commit(Mutation::DismissNotification(0));
    }

    saw_error
}
