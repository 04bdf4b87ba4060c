//! Sharing a page with another application.

use crate::clipboard::ClipboardHost;
use crate::error::{PlatformError, Result};

/// MIME type used for shared links.
pub const TEXT_PLAIN: &str = "text/plain";

/// A request to hand content to whichever application the user picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub mime: String,
    pub text: String,
    pub subject: String,
    /// Title of the application picker.
    pub chooser_title: String,
}

impl ShareRequest {
    /// Share a page: the url is the body and the page title the subject.
    pub fn page(title: &str, url: &str, chooser_title: &str) -> Self {
        Self {
            mime: TEXT_PLAIN.to_string(),
            text: url.to_string(),
            subject: title.to_string(),
            chooser_title: chooser_title.to_string(),
        }
    }
}

/// Delivers share requests to a receiving application.
pub trait ShareTarget {
    fn share(&mut self, request: &ShareRequest) -> Result<()>;
}

/// Share a page. Having no application to receive it is not an error.
pub fn share_page(
    target: &mut dyn ShareTarget,
    title: &str,
    url: &str,
    chooser_title: &str,
) -> Result<()> {
    let request = ShareRequest::page(title, url, chooser_title);
    match target.share(&request) {
        Err(PlatformError::NoHandler(what)) => {
            log::debug!("nothing can receive {}, share of {} dropped", what, url);
            Ok(())
        }
        other => other,
    }
}

/// Desktop fallback: plain-text shares land on the clipboard.
pub struct ClipboardShareTarget<C: ClipboardHost> {
    clipboard: C,
}

impl<C: ClipboardHost> ClipboardShareTarget<C> {
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    pub fn into_inner(self) -> C {
        self.clipboard
    }
}

impl<C: ClipboardHost> ShareTarget for ClipboardShareTarget<C> {
    fn share(&mut self, request: &ShareRequest) -> Result<()> {
        if request.mime != TEXT_PLAIN {
            return Err(PlatformError::NoHandler(request.mime.clone()));
        }
        self.clipboard.set_text(&request.text)
    }
}
