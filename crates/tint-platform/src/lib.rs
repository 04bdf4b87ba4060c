//! Host adapters for the Tint browser: message dialogs, the system clipboard
//! and page sharing.

pub mod clipboard;
pub mod dialog;
pub mod error;
pub mod share;

pub use clipboard::{ArboardClipboard, ClipboardHost, LogToaster, Toaster, copy_text_to_clipboard};
pub use dialog::{DialogHost, DialogIcon, DialogLabels, DialogResponse, DialogSpec, RfdDialogHost};
pub use error::{PlatformError, Result};
pub use share::{ClipboardShareTarget, ShareRequest, ShareTarget, share_page};
