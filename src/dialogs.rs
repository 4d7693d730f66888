//! Blocking Dialogs
//!
//! Confirmation and text-input capability injected into actions.

pub trait Dialogs {
    /// `true` when the user accepts
    fn confirm(&self, message: &str) -> bool;

    /// Entered text, or `None` when the user cancels
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

impl<D: Dialogs + ?Sized> Dialogs for &D {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        (**self).prompt(message, default)
    }
}
