//! An in-memory planner source, used to test editors without a server

use std::collections::{BTreeMap, VecDeque};
use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::event::{Event, EventId, EventInput};
use crate::session::Session;
use crate::traits::{PlannerSource, UpdateAck};

/// An update request received by a [`MockSource`]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedUpdate {
    pub id: EventId,
    pub input: EventInput,
    pub sid: String,
}

/// A planner source that keeps its events in memory, and records every update it is asked for.
///
/// Updates are applied to the stored events, so that a later fetch reflects them. \
/// Failures can be queued per operation: each queued message makes the next call of that operation fail with it.
#[derive(Debug, Default)]
pub struct MockSource {
    events: Mutex<BTreeMap<EventId, Vec<Event>>>,
    updates: Mutex<Vec<RecordedUpdate>>,
    fetch_count: Mutex<u32>,

    fetch_failures: Mutex<VecDeque<String>>,
    update_failures: Mutex<VecDeque<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event. Adding several events with the same ID simulates a server that does not enforce unique IDs
    pub fn add_event(&self, event: Event) {
        lock(&self.events).entry(event.id()).or_default().push(event);
    }

    /// The first stored event with this ID
    pub fn event(&self, id: EventId) -> Option<Event> {
        lock(&self.events).get(&id).and_then(|events| events.first().cloned())
    }

    /// Every update received so far, in order (including failed ones)
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        lock(&self.updates).clone()
    }

    /// How many fetches have been received so far (including failed ones)
    pub fn fetch_count(&self) -> u32 {
        *lock(&self.fetch_count)
    }

    /// Make the next fetch that has no failure queued yet fail with this message
    pub fn fail_next_fetch<S: ToString>(&self, message: S) {
        lock(&self.fetch_failures).push_back(message.to_string());
    }

    /// Make the next update that has no failure queued yet fail with this message.
    /// The update is still recorded, but not applied.
    pub fn fail_next_update<S: ToString>(&self, message: S) {
        lock(&self.update_failures).push_back(message.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Pop the next queued failure, if any
fn take_failure(queue: &Mutex<VecDeque<String>>, operation: &str) -> Result<(), Box<dyn Error>> {
    match lock(queue).pop_front() {
        None => Ok(()),
        Some(message) => {
            log::debug!("Mocked {} fails: {}", operation, message);
            Err(message.into())
        },
    }
}

#[async_trait]
impl PlannerSource for MockSource {
    async fn fetch_umbrella_by_id(&self, id: EventId) -> Result<Vec<Event>, Box<dyn Error>> {
        *lock(&self.fetch_count) += 1;
        take_failure(&self.fetch_failures, "fetch")?;

        Ok(lock(&self.events).get(&id).cloned().unwrap_or_default())
    }

    async fn update_event(&self, id: EventId, event: &EventInput, session: &Session) -> Result<UpdateAck, Box<dyn Error>> {
        lock(&self.updates).push(RecordedUpdate{
            id,
            input: event.clone(),
            sid: session.sid().to_string(),
        });
        take_failure(&self.update_failures, "update")?;

        let mut events = lock(&self.events);
        let stored = match events.get_mut(&id).and_then(|events| events.first_mut()) {
            None => return Err(format!("No event with ID {}", id).into()),
            Some(stored) => stored,
        };
        stored.set_title(&event.title);
        stored.set_range(event.from, event.to);
        Ok(UpdateAck{ id })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn queued_failures_are_consumed_in_order() {
        let source = MockSource::new();
        source.add_event(Event::new(1, "A", date(2024, 1, 1), date(2024, 1, 2)));
        source.fail_next_fetch("first");
        source.fail_next_fetch("second");

        assert_eq!(source.fetch_umbrella_by_id(1).await.unwrap_err().to_string(), "first");
        assert_eq!(source.fetch_umbrella_by_id(1).await.unwrap_err().to_string(), "second");
        assert_eq!(source.fetch_umbrella_by_id(1).await.unwrap().len(), 1);
        assert_eq!(source.fetch_count(), 3);
    }

    #[tokio::test]
    async fn failed_updates_are_recorded_but_not_applied() {
        let source = MockSource::new();
        source.add_event(Event::new(1, "A", date(2024, 1, 1), date(2024, 1, 2)));
        source.fail_next_update("read-only");
        let session = Session::new("sid");
        let input = EventInput {
            title: "B".to_string(),
            needs_tutors: false,
            from: date(2024, 1, 1),
            to: date(2024, 1, 2),
        };

        assert!(source.update_event(1, &input, &session).await.is_err());
        assert_eq!(source.event(1).unwrap().title(), "A");

        source.update_event(1, &input, &session).await.unwrap();
        assert_eq!(source.event(1).unwrap().title(), "B");
        assert_eq!(source.updates().len(), 2);

        assert!(source.update_event(2, &input, &session).await.is_err());
    }
}
