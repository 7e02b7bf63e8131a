//! Pieces shared by the per-page form states.
//!
//! DESIGN
//! ======
//! Each page owns its own form state in an `RwSignal`; nothing here is global.
//! Async flows reach that state only through [`FormCell`], so a response that
//! arrives after the page unmounted has nowhere to land.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

/// Write access to a page's form state that can outlive the page.
pub trait FormCell<T> {
    /// Run `f` against the live state, or return `None` if the owning view is gone.
    fn try_update_form<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Whether the owning view still exists.
    fn is_live(&self) -> bool {
        self.try_update_form(|_| ()).is_some()
    }
}

impl<T: Send + Sync + 'static> FormCell<T> for RwSignal<T> {
    fn try_update_form<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn is_live(&self) -> bool {
        !self.is_disposed()
    }
}

/// Why a submit did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is outstanding or the form already finished.
    Busy,
    /// Client-side validation failed; the form now shows the error.
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Identifies this notice so a stale auto-dismiss timer cannot clear a newer one.
    pub seq: u64,
}

/// The single toast slot of a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    pub current: Option<Notice>,
    seq: u64,
}

impl Notices {
    /// Replace the visible notice and return its sequence number.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice {
            kind,
            text: text.into(),
            seq: self.seq,
        });
        self.seq
    }

    /// Clear the notice only if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }
}
