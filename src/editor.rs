//! This module holds the state of an umbrella being edited
//!
//! A [`PlannerEditor`] loads one umbrella from a [`PlannerSource`], and commits the changes the user makes to its title or to its date range. \
//! Every commit sends the full set of editable fields: the changed ones, and the current values of the others.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::config;
use crate::event::{Event, EventId, EventInput};
use crate::feedback::{Dialog, FeedbackSender, UiEvent};
use crate::form::TitleForm;
use crate::range::DateRangePicker;
use crate::session::Session;
use crate::traits::PlannerSource;
use crate::utils::planner_path;

/// Editor operations that cannot be run in the current state
#[derive(Clone, Debug, PartialEq)]
pub enum EditError {
    /// No umbrella has been loaded (yet)
    NotLoaded,
    /// The server has no umbrella with this ID
    NotFound(EventId),
    /// A change was requested without a session
    MissingSession,
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::NotLoaded => write!(f, "No umbrella is loaded"),
            EditError::NotFound(id) => write!(f, "No umbrella with ID {}", id),
            EditError::MissingSession => write!(f, "You must be logged in to change an umbrella"),
        }
    }
}

impl Error for EditError {}


/// What happened to a submitted title
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The title is invalid. Nothing has been sent, and the form shows this message
    Rejected(String),
    /// The title has been saved, and the user has been sent to this path
    Committed{ path: String },
}

/// What happened to a date range reported by the picker
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommitOutcome {
    /// The range is incomplete, or is the current one. Nothing has been sent
    Skipped,
    /// The range has been saved
    Committed,
}


/// The state of one umbrella being edited
pub struct PlannerEditor<S: PlannerSource> {
    source: S,

    umbrella_id: Option<EventId>,
    umbrella: Option<Event>,
    loading: bool,

    title_form: TitleForm,
    title_dialog_open: bool,
    /// The dialog that adds sub-events. Its content is handled elsewhere
    event_dialog_open: bool,

    feedback_channel: Option<FeedbackSender>,
}

impl<S: PlannerSource> PlannerEditor<S> {
    /// Create an editor. Nothing is loaded until [`Self::load`] is called
    pub fn new(source: S) -> Self {
        Self {
            source,
            umbrella_id: None,
            umbrella: None,
            loading: false,
            title_form: TitleForm::new(),
            title_dialog_open: false,
            event_dialog_open: false,
            feedback_channel: None,
        }
    }

    /// Create an editor that reports notifications, navigations and dialog changes to `channel`
    pub fn new_with_feedback_channel(source: S, channel: FeedbackSender) -> Self {
        let mut editor = Self::new(source);
        editor.feedback_channel = Some(channel);
        editor
    }

    pub fn source(&self) -> &S { &self.source }
    /// The ID of the last umbrella [`Self::load`] was called for
    pub fn umbrella_id(&self) -> Option<EventId> { self.umbrella_id }
    /// The loaded umbrella, as it was when it was fetched
    pub fn umbrella(&self) -> Option<&Event> { self.umbrella.as_ref() }
    pub fn is_loading(&self) -> bool { self.loading }
    pub fn title_form(&self) -> &TitleForm { &self.title_form }
    pub fn title_dialog_open(&self) -> bool { self.title_dialog_open }
    pub fn event_dialog_open(&self) -> bool { self.event_dialog_open }

    pub fn open_title_dialog(&mut self) {
        self.title_dialog_open = true;
    }

    pub fn close_title_dialog(&mut self) {
        if self.title_dialog_open {
            self.title_dialog_open = false;
            self.feedback(UiEvent::DialogClosed(Dialog::Title));
        }
    }

    pub fn open_event_dialog(&mut self) {
        self.event_dialog_open = true;
    }

    pub fn close_event_dialog(&mut self) {
        if self.event_dialog_open {
            self.event_dialog_open = false;
            self.feedback(UiEvent::DialogClosed(Dialog::Event));
        }
    }

    /// A date range picker showing the current range of the umbrella
    pub fn date_picker(&self) -> Option<DateRangePicker> {
        self.umbrella.as_ref().map(|umbrella| DateRangePicker::new(Some(umbrella.from()), Some(umbrella.to())))
    }

    /// Fetch an umbrella, and use its title as the default value of the title form.
    ///
    /// In case the server knows several umbrellas with this ID, the first one is used.
    pub async fn load(&mut self, id: EventId) -> Result<(), Box<dyn Error>> {
        self.loading = true;
        self.umbrella_id = Some(id);
        self.umbrella = None;
        self.title_form.reset("");

        let result = self.source.fetch_umbrella_by_id(id).await;
        self.loading = false;

        let umbrellas = match result {
            Err(err) => {
                self.failure(&config::LOAD_FAILED_MESSAGE, &err);
                return Err(err);
            },
            Ok(umbrellas) => umbrellas,
        };
        if umbrellas.len() > 1 {
            log::warn!("The server returned {} umbrellas with ID {}. Using the first one", umbrellas.len(), id);
        }
        let umbrella = match umbrellas.into_iter().next() {
            None => {
                let err = EditError::NotFound(id);
                self.failure(&config::LOAD_FAILED_MESSAGE, &err);
                return Err(err.into());
            },
            Some(umbrella) => umbrella,
        };

        log::info!("Loaded umbrella {} ({})", umbrella.id(), umbrella.title());
        self.title_form.reset(umbrella.title());
        self.umbrella = Some(umbrella);
        Ok(())
    }

    /// Submit the title form.
    ///
    /// An invalid title is rejected without sending anything. \
    /// Otherwise, the new title is sent along with the current dates. Once the server accepted it, the user is notified, sent to the new page of this umbrella, and the dialog is closed.
    pub async fn submit_title(&mut self, title: &str, session: Option<&Session>) -> Result<SubmitOutcome, Box<dyn Error>> {
        let (id, input) = {
            let umbrella = self.current()?;
            (umbrella.id(), umbrella.rename_input(title))
        };

        self.title_form.set_value(title);
        if let Err(message) = self.title_form.validate() {
            log::debug!("Rejected title {:?}: {}", title, message);
            return Ok(SubmitOutcome::Rejected(message));
        }

        self.commit(id, &input, session).await?;

        self.feedback(UiEvent::success(config::get(&config::TITLE_SAVED_MESSAGE)));
        let path = planner_path(title, id);
        self.feedback(UiEvent::Navigate(path.clone()));
        self.close_title_dialog();
        Ok(SubmitOutcome::Committed{ path })
    }

    /// Handle the range reported by a date picker when it is closed.
    ///
    /// The range is sent along with the current title, unless a bound is missing or the range is the current one.
    pub async fn on_date_picker_close(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>, session: Option<&Session>) -> Result<CommitOutcome, Box<dyn Error>> {
        let (id, input) = {
            let umbrella = self.current()?;
            let (from, to) = match (from, to) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    log::debug!("Incomplete range ({:?} - {:?}), nothing to save", from, to);
                    return Ok(CommitOutcome::Skipped);
                },
            };
            if umbrella.range_differs(from, to) == false {
                log::debug!("Range of umbrella {} is unchanged", umbrella.id());
                return Ok(CommitOutcome::Skipped);
            }
            (umbrella.id(), umbrella.range_input(from, to))
        };

        self.commit(id, &input, session).await?;

        self.feedback(UiEvent::success(config::get(&config::RANGE_SAVED_MESSAGE)));
        Ok(CommitOutcome::Committed)
    }

    /// Close a date picker, and handle the range it reports (if any)
    pub async fn close_date_picker(&mut self, picker: &mut DateRangePicker, session: Option<&Session>) -> Result<CommitOutcome, Box<dyn Error>> {
        match picker.close() {
            None => Ok(CommitOutcome::Skipped),
            Some(selection) => self.on_date_picker_close(selection.from, selection.to, session).await,
        }
    }

    fn current(&self) -> Result<&Event, EditError> {
        self.umbrella.as_ref().ok_or(EditError::NotLoaded)
    }

    /// Send an update and wait for the server to accept it.
    /// Failures are reported to the user before being returned.
    async fn commit(&mut self, id: EventId, input: &EventInput, session: Option<&Session>) -> Result<(), Box<dyn Error>> {
        let session = match session {
            None => {
                let err = EditError::MissingSession;
                self.failure(&config::SAVE_FAILED_MESSAGE, &err);
                return Err(err.into());
            },
            Some(session) => session,
        };

        self.loading = true;
        let result = self.source.update_event(id, input, session).await;
        self.loading = false;

        match result {
            Err(err) => {
                self.failure(&config::SAVE_FAILED_MESSAGE, &err);
                Err(err)
            },
            Ok(ack) => {
                log::info!("Umbrella {} updated ({:?} from {} to {})", ack.id, input.title, input.from, input.to);
                Ok(())
            },
        }
    }

    fn failure<E: Display + ?Sized>(&self, prefix: &Lazy<Arc<Mutex<String>>>, err: &E) {
        let message = format!("{}: {}", config::get(prefix), err);
        log::error!("{}", message);
        self.feedback(UiEvent::error(message));
    }

    /// Send an event as a feedback to the listener (if any).
    fn feedback(&self, event: UiEvent) {
        if let Some(sender) = &self.feedback_channel {
            if sender.send(event).is_err() {
                log::debug!("Feedback receiver has been dropped");
            }
        }
    }
}
