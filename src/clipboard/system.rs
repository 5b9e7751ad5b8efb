//! Clipboard ports backed by the operating system and the terminal.

use std::io::{IsTerminal, stderr};
#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

use crossterm::{clipboard::CopyToClipboard, execute};

use super::{Clipboard, ClipboardError, LegacyCopy};
use crate::debug;

/// How long a Linux write keeps serving the selection while waiting for a
/// clipboard manager to take it over.
#[cfg(target_os = "linux")]
const HANDOFF_TIMEOUT: Duration = Duration::from_secs(1);

fn write_err(e: arboard::Error) -> ClipboardError {
    ClipboardError::Write(e.to_string())
}

/// The OS clipboard through `arboard`.
///
/// Initialization can fail on headless machines; that counts as unavailable
/// rather than as an error. On X11 the selection lives only as long as its
/// owner, so a write counts as done only once the text reads back after the
/// handle is gone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn is_available(&self) -> bool {
        match arboard::Clipboard::new() {
            Ok(_) => true,
            Err(e) => {
                debug!("copy"; "system clipboard unavailable: {e}");
                false
            }
        }
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || write_blocking(&text))
            .await
            .map_err(|e| ClipboardError::Write(e.to_string()))?
    }
}

#[cfg(target_os = "linux")]
fn write_blocking(text: &str) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    let mut clipboard = arboard::Clipboard::new().map_err(write_err)?;
    clipboard
        .set()
        .wait_until(Instant::now() + HANDOFF_TIMEOUT)
        .text(text)
        .map_err(write_err)?;
    drop(clipboard);

    let read_back = arboard::Clipboard::new().and_then(|mut c| c.get_text());
    confirm_persisted(text, read_back)
}

#[cfg(not(target_os = "linux"))]
fn write_blocking(text: &str) -> Result<(), ClipboardError> {
    arboard::Clipboard::new()
        .map_err(write_err)?
        .set_text(text)
        .map_err(write_err)
}

/// Check the selection still holds `expected` once our handle is dropped.
#[cfg(any(target_os = "linux", test))]
fn confirm_persisted(
    expected: &str,
    read_back: Result<String, arboard::Error>,
) -> Result<(), ClipboardError> {
    match read_back {
        Ok(text) if text == expected => Ok(()),
        Ok(_) => Err(ClipboardError::Write(
            "clipboard was overwritten before it could be confirmed".into(),
        )),
        Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::Write(
            "no clipboard manager kept the text after exit".into(),
        )),
        Err(e) => Err(write_err(e)),
    }
}

/// OSC 52 escape written to the controlling terminal (stderr).
///
/// Works over SSH and inside multiplexers that forward OSC 52, but the
/// terminal gives no acknowledgement, so success only means the sequence was
/// written.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52;

impl LegacyCopy for Osc52 {
    fn copy_sync(&self, text: &str) -> Result<(), ClipboardError> {
        let mut err = stderr();
        if !err.is_terminal() {
            return Err(ClipboardError::Legacy("stderr is not a terminal".into()));
        }
        execute!(err, CopyToClipboard::to_clipboard_from(text))
            .map_err(|e| ClipboardError::Legacy(e.to_string()))
    }
}
