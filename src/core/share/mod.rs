mod clipboard;
mod link;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use link::{FRAGMENT_PARAM, decode, encode, share_link, state_from_link};

use crate::core::form::FormState;
use crate::error::ShareError;
use std::cell::RefCell;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Short-lived user feedback, e.g. "Copied".
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Prints notices to the terminal and mirrors them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => {
                tracing::info!(notice = message);
                eprintln!("✓ {message}");
            }
            NoticeLevel::Error => {
                tracing::warn!(notice = message);
                eprintln!("✗ {message}");
            }
        }
    }
}

/// Collects notices for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

fn write_and_notify(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    text: &str,
    success: &str,
) -> Result<(), ShareError> {
    match clipboard.write_text(text) {
        Ok(()) => {
            notifier.notify(NoticeLevel::Success, success);
            Ok(())
        }
        Err(error) => {
            notifier.notify(NoticeLevel::Error, &format!("Copy failed: {error}"));
            Err(error)
        }
    }
}

pub fn copy(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    text: &str,
) -> Result<(), ShareError> {
    write_and_notify(clipboard, notifier, text, "Copied")
}

/// Build the share link for `state` relative to `base` and copy it.
pub fn share(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    base: &str,
    state: &FormState,
) -> Result<Url, ShareError> {
    let link = share_link(base, state)?;
    write_and_notify(clipboard, notifier, link.as_str(), "Shareable link copied")?;
    Ok(link)
}
