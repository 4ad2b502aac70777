//! Host notification seam used to report a successful submission.

/// Receives the result of a successful submission. Calls are fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, title: &str, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str, &str),
{
    fn notify(&mut self, title: &str, message: &str) {
        self(title, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Notifier that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, title: &str, message: &str) {
        self.entries.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
