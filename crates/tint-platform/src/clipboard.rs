use crate::error::Result;

/// Somewhere plain text can be copied to.
pub trait ClipboardHost {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard.
pub struct ArboardClipboard {
    inner: arboard::Clipboard,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardHost for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// Short, non-blocking user notifications.
pub trait Toaster {
    fn show_toast(&self, message: &str);
}

/// Writes toasts to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogToaster;

impl Toaster for LogToaster {
    fn show_toast(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// Copy `text` to the clipboard, then show `toast_message` if it is non-empty.
pub fn copy_text_to_clipboard(
    clipboard: &mut dyn ClipboardHost,
    toaster: &dyn Toaster,
    text: &str,
    toast_message: Option<&str>,
) -> Result<()> {
    clipboard.set_text(text)?;

    if let Some(message) = toast_message.filter(|m| !m.is_empty()) {
        toaster.show_toast(message);
    }
    Ok(())
}
