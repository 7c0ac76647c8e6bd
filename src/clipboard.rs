//! Clipboard output for the copy actions.

use anyhow::{anyhow, Result};

/// Write-only clipboard capability.
///
/// Callers treat failures as best effort; platforms may deny access.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via `cli-clipboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_owned())
            .map_err(|e| anyhow!("Failed to write clipboard: {}", e))
    }
}
