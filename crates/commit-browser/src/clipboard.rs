//! System clipboard access behind a small trait so effects can be tested

use anyhow::{Result, anyhow};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard of the desktop session (X11/Wayland, macOS or Windows)
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        // A fresh context per copy; no display connection is held between copies
        let mut ctx = ClipboardContext::new().map_err(|e| anyhow!("{}", e))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| anyhow!("{}", e))?;
        Ok(())
    }
}

/// In-memory clipboard recording what was copied
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail_with: Option<String>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(err) = &self.fail_with {
            return Err(anyhow!("{}", err));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
