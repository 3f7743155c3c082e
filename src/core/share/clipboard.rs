use crate::error::ShareError;
use std::cell::RefCell;
use std::io::Write;
use std::process::{Command, Stdio};

/// System clipboard write capability.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Platform clipboard helpers, tried in order.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Pipes text into the first clipboard helper that runs successfully.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        for (program, args) in CLIPBOARD_TOOLS {
            match Self::pipe_into(program, args, text) {
                Ok(true) => {
                    tracing::debug!(program, "clipboard write");
                    return Ok(());
                }
                Ok(false) => tracing::debug!(program, "clipboard helper exited with failure"),
                Err(error) => tracing::trace!(program, %error, "clipboard helper unavailable"),
            }
        }
        Err(ShareError::Clipboard(
            "no clipboard helper found (tried pbcopy, wl-copy, xclip, xsel, clip)".into(),
        ))
    }
}

/// Records every write; used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: RefCell<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}
