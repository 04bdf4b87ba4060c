//! Standard confirmation and notice dialogs.
//!
//! Dialogs are described by a [`DialogSpec`] and shown through a
//! [`DialogHost`]; the helpers below build the common variants and run the
//! caller's callback for whichever button was pressed.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Icon shown next to the dialog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Info,
    Warning,
    Alert,
}

/// Which button closed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    Positive,
    Negative,
    /// Closed without pressing a button (back key, click outside, window close).
    Dismissed,
}

/// Button captions. Replace the defaults to localise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    pub yes: String,
    pub no: String,
    pub continue_: String,
    pub cancel: String,
    pub ok: String,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
            continue_: "Continue".to_string(),
            cancel: "Cancel".to_string(),
            ok: "OK".to_string(),
        }
    }
}

/// Everything needed to present one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub icon: DialogIcon,
    pub title: String,
    pub message: String,
    /// Whether closing the window (back key, close button) counts as the
    /// negative answer. When false a close is only reported as `Dismissed`.
    pub cancelable: bool,
    pub positive: String,
    pub negative: Option<String>,
}

impl DialogSpec {
    pub fn yes_no(
        labels: &DialogLabels,
        icon: DialogIcon,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            message: message.into(),
            cancelable: true,
            positive: labels.yes.clone(),
            negative: Some(labels.no.clone()),
        }
    }

    pub fn continue_cancel(
        labels: &DialogLabels,
        icon: DialogIcon,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            message: message.into(),
            cancelable: true,
            positive: labels.continue_.clone(),
            negative: Some(labels.cancel.clone()),
        }
    }

    pub fn error(labels: &DialogLabels, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: DialogIcon::Alert,
            title: title.into(),
            message: message.into(),
            cancelable: true,
            positive: labels.ok.clone(),
            negative: None,
        }
    }

    pub fn message(labels: &DialogLabels, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: DialogIcon::Info,
            title: title.into(),
            message: message.into(),
            cancelable: true,
            positive: labels.ok.clone(),
            negative: None,
        }
    }

    /// Prompt raised on behalf of an addon, with addon-supplied button captions.
    pub fn addon_ask(
        title: impl Into<String>,
        message: impl Into<String>,
        positive: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        Self {
            icon: DialogIcon::Info,
            title: title.into(),
            message: message.into(),
            cancelable: true,
            positive: positive.into(),
            negative: Some(negative.into()),
        }
    }

    /// Set whether closing the dialog answers it negatively.
    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }
}

/// Presents dialogs and blocks until one is closed.
pub trait DialogHost {
    fn show(&self, spec: &DialogSpec) -> DialogResponse;
}

/// Native message boxes through `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdDialogHost;

impl RfdDialogHost {
    fn level(icon: DialogIcon) -> MessageLevel {
        match icon {
            DialogIcon::Info => MessageLevel::Info,
            DialogIcon::Warning => MessageLevel::Warning,
            DialogIcon::Alert => MessageLevel::Error,
        }
    }

    fn buttons(spec: &DialogSpec) -> MessageButtons {
        match &spec.negative {
            Some(negative) => MessageButtons::OkCancelCustom(spec.positive.clone(), negative.clone()),
            None => MessageButtons::OkCustom(spec.positive.clone()),
        }
    }

    /// Map whatever the backend reports onto the spec's buttons.
    fn response(spec: &DialogSpec, result: MessageDialogResult) -> DialogResponse {
        match result {
            MessageDialogResult::Ok | MessageDialogResult::Yes => DialogResponse::Positive,
            MessageDialogResult::No | MessageDialogResult::Cancel
                if spec.cancelable && spec.negative.is_some() =>
            {
                DialogResponse::Negative
            }
            MessageDialogResult::No | MessageDialogResult::Cancel => DialogResponse::Dismissed,
            MessageDialogResult::Custom(label) if label == spec.positive => DialogResponse::Positive,
            MessageDialogResult::Custom(label) if spec.negative.as_deref() == Some(label.as_str()) => {
                DialogResponse::Negative
            }
            MessageDialogResult::Custom(_) => DialogResponse::Dismissed,
        }
    }
}

impl DialogHost for RfdDialogHost {
    fn show(&self, spec: &DialogSpec) -> DialogResponse {
        let result = MessageDialog::new()
            .set_level(Self::level(spec.icon))
            .set_title(spec.title.as_str())
            .set_description(spec.message.as_str())
            .set_buttons(Self::buttons(spec))
            .show();
        let response = Self::response(spec, result);
        log::debug!("dialog {:?} closed with {:?}", spec.title, response);
        response
    }
}

/// Yes / No confirmation. `on_yes` runs only for Yes; No just closes the dialog.
pub fn show_yes_no_dialog(
    host: &dyn DialogHost,
    labels: &DialogLabels,
    icon: DialogIcon,
    title: &str,
    message: &str,
    on_yes: impl FnOnce(),
) -> DialogResponse {
    let response = host.show(&DialogSpec::yes_no(labels, icon, title, message));
    if response == DialogResponse::Positive {
        on_yes();
    }
    response
}

/// Continue / Cancel confirmation with a callback for each button.
pub fn show_continue_cancel_dialog(
    host: &dyn DialogHost,
    labels: &DialogLabels,
    icon: DialogIcon,
    title: &str,
    message: &str,
    on_continue: impl FnOnce(),
    on_cancel: impl FnOnce(),
) -> DialogResponse {
    let response = host.show(&DialogSpec::continue_cancel(labels, icon, title, message));
    match response {
        DialogResponse::Positive => on_continue(),
        DialogResponse::Negative => on_cancel(),
        DialogResponse::Dismissed => {}
    }
    response
}

pub fn show_error_dialog(host: &dyn DialogHost, labels: &DialogLabels, title: &str, message: &str) {
    host.show(&DialogSpec::error(labels, title, message));
}

pub fn show_message_dialog(host: &dyn DialogHost, labels: &DialogLabels, title: &str, message: &str) {
    host.show(&DialogSpec::message(labels, title, message));
}

/// Ask the user something on behalf of an addon.
pub fn show_addon_ask_user_dialog(
    host: &dyn DialogHost,
    title: &str,
    message: &str,
    positive_text: &str,
    negative_text: &str,
    on_positive: impl FnOnce(),
    on_negative: impl FnOnce(),
) -> DialogResponse {
    let spec = DialogSpec::addon_ask(title, message, positive_text, negative_text);
    let response = host.show(&spec);
    match response {
        DialogResponse::Positive => on_positive(),
        DialogResponse::Negative => on_negative(),
        DialogResponse::Dismissed => {}
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records every spec and answers with a fixed response.
    struct ScriptedHost {
        answer: DialogResponse,
        shown: RefCell<Vec<DialogSpec>>,
    }

    impl ScriptedHost {
        fn answering(answer: DialogResponse) -> Self {
            Self {
                answer,
                shown: RefCell::new(Vec::new()),
            }
        }

        fn last(&self) -> DialogSpec {
            self.shown.borrow().last().cloned().unwrap()
        }
    }

    impl DialogHost for ScriptedHost {
        fn show(&self, spec: &DialogSpec) -> DialogResponse {
            self.shown.borrow_mut().push(spec.clone());
            self.answer
        }
    }

    #[test]
    fn test_yes_no_runs_callback_on_yes_only() {
        let labels = DialogLabels::default();
        let fired = Cell::new(0);

        let host = ScriptedHost::answering(DialogResponse::Positive);
        show_yes_no_dialog(&host, &labels, DialogIcon::Warning, "Clear history", "Sure?", || {
            fired.set(fired.get() + 1)
        });
        assert_eq!(fired.get(), 1);

        let spec = host.last();
        assert_eq!(spec.icon, DialogIcon::Warning);
        assert_eq!(spec.positive, "Yes");
        assert_eq!(spec.negative.as_deref(), Some("No"));
        assert!(spec.cancelable);

        let host = ScriptedHost::answering(DialogResponse::Negative);
        show_yes_no_dialog(&host, &labels, DialogIcon::Warning, "Clear history", "Sure?", || {
            fired.set(fired.get() + 1)
        });
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_continue_cancel_dispatch() {
        let labels = DialogLabels::default();
        let continued = Cell::new(false);
        let cancelled = Cell::new(false);

        let host = ScriptedHost::answering(DialogResponse::Negative);
        let response = show_continue_cancel_dialog(
            &host,
            &labels,
            DialogIcon::Info,
            "Leave page",
            "Unsaved form data",
            || continued.set(true),
            || cancelled.set(true),
        );
        assert_eq!(response, DialogResponse::Negative);
        assert!(!continued.get());
        assert!(cancelled.get());
        assert_eq!(host.last().positive, "Continue");
        assert_eq!(host.last().negative.as_deref(), Some("Cancel"));
    }

    #[test]
    fn test_dismissed_runs_nothing() {
        let host = ScriptedHost::answering(DialogResponse::Dismissed);
        let ran = Cell::new(false);
        show_addon_ask_user_dialog(
            &host,
            "Addon",
            "Allow?",
            "Allow",
            "Deny",
            || ran.set(true),
            || ran.set(true),
        );
        assert!(!ran.get());
        let spec = host.last();
        assert_eq!(spec.icon, DialogIcon::Info);
        assert_eq!(spec.positive, "Allow");
        assert_eq!(spec.negative.as_deref(), Some("Deny"));
    }

    #[test]
    fn test_error_and_message_dialogs() {
        let labels = DialogLabels {
            ok: "D'accord".to_string(),
            ..DialogLabels::default()
        };
        let host = ScriptedHost::answering(DialogResponse::Positive);

        show_error_dialog(&host, &labels, "Download failed", "Disk full");
        let spec = host.last();
        assert_eq!(spec.icon, DialogIcon::Alert);
        assert_eq!(spec.positive, "D'accord");
        assert_eq!(spec.negative, None);

        show_message_dialog(&host, &labels, "Saved", "Page saved");
        assert_eq!(host.last().icon, DialogIcon::Info);
        assert_eq!(host.shown.borrow().len(), 2);
    }

    #[test]
    fn test_rfd_result_mapping() {
        let labels = DialogLabels::default();
        let two = DialogSpec::yes_no(&labels, DialogIcon::Info, "t", "m");
        let one = DialogSpec::message(&labels, "t", "m");

        assert_eq!(
            RfdDialogHost::response(&two, MessageDialogResult::Custom("Yes".into())),
            DialogResponse::Positive
        );
        assert_eq!(
            RfdDialogHost::response(&two, MessageDialogResult::Custom("No".into())),
            DialogResponse::Negative
        );
        assert_eq!(
            RfdDialogHost::response(&two, MessageDialogResult::Cancel),
            DialogResponse::Negative
        );
        assert_eq!(
            RfdDialogHost::response(&one, MessageDialogResult::Cancel),
            DialogResponse::Dismissed
        );
        assert_eq!(
            RfdDialogHost::response(&one, MessageDialogResult::Ok),
            DialogResponse::Positive
        );
        assert_eq!(
            RfdDialogHost::response(&one, MessageDialogResult::Custom("Other".into())),
            DialogResponse::Dismissed
        );
    }

    #[test]
    fn test_non_cancelable_close_is_dismissed() {
        let labels = DialogLabels::default();
        let spec = DialogSpec::continue_cancel(&labels, DialogIcon::Warning, "t", "m")
            .with_cancelable(false);
        assert!(!spec.cancelable);

        assert_eq!(
            RfdDialogHost::response(&spec, MessageDialogResult::Cancel),
            DialogResponse::Dismissed
        );
        assert_eq!(
            RfdDialogHost::response(&spec, MessageDialogResult::No),
            DialogResponse::Dismissed
        );
        // The buttons themselves still answer.
        assert_eq!(
            RfdDialogHost::response(&spec, MessageDialogResult::Custom("Cancel".into())),
            DialogResponse::Negative
        );
        assert_eq!(
            RfdDialogHost::response(&spec, MessageDialogResult::Custom("Continue".into())),
            DialogResponse::Positive
        );
    }

    #[test]
    fn test_rfd_buttons() {
        let labels = DialogLabels::default();
        let spec = DialogSpec::continue_cancel(&labels, DialogIcon::Info, "t", "m");
        assert!(matches!(
            RfdDialogHost::buttons(&spec),
            MessageButtons::OkCancelCustom(ref p, ref n) if p == "Continue" && n == "Cancel"
        ));
        let spec = DialogSpec::error(&labels, "t", "m");
        assert!(matches!(
            RfdDialogHost::buttons(&spec),
            MessageButtons::OkCustom(ref p) if p == "OK"
        ));
        assert!(matches!(RfdDialogHost::level(DialogIcon::Alert), MessageLevel::Error));
    }
}
