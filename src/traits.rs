use std::error::Error;

use async_trait::async_trait;

use crate::event::{Event, EventId, EventInput};
use crate::session::Session;

/// The acknowledgement of a mutation: the ID of the event that has been updated
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateAck {
    pub id: EventId,
}

/// A remote source of planner events (usually a GraphQL server)
#[async_trait]
pub trait PlannerSource {
    /// Returns every umbrella that matches this ID.
    /// The server is expected to return at most one, but this is not enforced here.
    ///
    /// This is an unauthenticated request.
    async fn fetch_umbrella_by_id(&self, id: EventId) -> Result<Vec<Event>, Box<dyn Error>>;

    /// Replace the title, dates and `needsTutors` flag of an event
    async fn update_event(&self, id: EventId, event: &EventInput, session: &Session) -> Result<UpdateAck, Box<dyn Error>>;
}
