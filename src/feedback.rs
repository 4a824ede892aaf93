//! Utilities to report what the editor did to the user interface

use std::fmt::{Display, Error, Formatter};

/// How a toast should be presented
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// The dialogs an editor can open
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dialog {
    /// Renames the umbrella
    Title,
    /// Adds a sub-event to the umbrella
    Event,
}

/// Something the user interface should react to
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Show a transient notification
    Toast{ kind: ToastKind, message: String },
    /// Navigate to this (relative) path
    Navigate(String),
    /// A dialog has been closed
    DialogClosed(Dialog),
}

impl UiEvent {
    pub fn success<S: ToString>(message: S) -> Self {
        Self::Toast{ kind: ToastKind::Success, message: message.to_string() }
    }

    pub fn error<S: ToString>(message: S) -> Self {
        Self::Toast{ kind: ToastKind::Error, message: message.to_string() }
    }
}

impl Display for UiEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            UiEvent::Toast{kind, message} => match kind {
                ToastKind::Success => write!(f, "{}", message),
                ToastKind::Error => write!(f, "Error: {}", message),
            },
            UiEvent::Navigate(path) => write!(f, "-> {}", path),
            UiEvent::DialogClosed(dialog) => write!(f, "{:?} dialog closed", dialog),
        }
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::mpsc::UnboundedSender<UiEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::mpsc::UnboundedReceiver<UiEvent>;

/// Create a feeback channel, that can be used to retrieve every notification, navigation and dialog change of an editor
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// Drain every event that is currently waiting in a receiver
pub fn pending_events(receiver: &mut FeedbackReceiver) -> Vec<UiEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
