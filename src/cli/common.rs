//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::clipboard::{Control, CopyOutcome, Osc52, SystemClipboard, copy_to_clipboard};
use crate::log;

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str, module: &str) -> Result<()> {
    let Some(path) = output else {
        println!("{content}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log!(module; "wrote {}", path.display());
    Ok(())
}

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Stand-in for the clicked button: confirmations go to the log.
#[derive(Debug, Clone)]
pub struct TerminalControl {
    content: String,
}

impl TerminalControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: label.into(),
        }
    }
}

impl Control for TerminalControl {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, content: String) {
        log!("copy"; "{}", content);
        self.content = content;
    }
}

/// Copy `text` with the OS clipboard, falling back to OSC 52.
pub async fn copy_text(text: &str, label: &str, message: &str) -> Result<()> {
    let mut control = TerminalControl::new(label);
    match copy_to_clipboard(&SystemClipboard, &Osc52, &mut control, text, message).await {
        CopyOutcome::Copied { .. } => Ok(()),
        CopyOutcome::Failed(err) => bail!(err),
    }
}
