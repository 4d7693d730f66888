//! User Feedback
//!
//! Busy indicator and transient notifications, behind a trait so actions and
//! the gateway can be driven without a browser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification",
            NotificationKind::Info => "notification info",
            NotificationKind::Error => "notification error",
        }
    }
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

/// Sink for busy state and notifications
pub trait Feedback {
    /// A remote call started
    fn request_started(&self);
    /// A remote call finished, successfully or not
    fn request_finished(&self);
    fn notify(&self, notification: Notification);
}

impl<F: Feedback + ?Sized> Feedback for &F {
    fn request_started(&self) {
        (**self).request_started()
    }

    fn request_finished(&self) {
        (**self).request_finished()
    }

    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Keeps the busy indicator on while alive
#[must_use = "the busy indicator is released as soon as the guard is dropped"]
pub struct BusyGuard<'a, F: Feedback + ?Sized> {
    feedback: &'a F,
}

impl<'a, F: Feedback + ?Sized> BusyGuard<'a, F> {
    pub fn acquire(feedback: &'a F) -> Self {
        feedback.request_started();
        Self { feedback }
    }
}

impl<F: Feedback + ?Sized> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.feedback.request_finished();
    }
}
