//! This module provides a client to connect to the planner GraphQL server

use std::error::Error;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::event::{Event, EventId, EventInput};
use crate::session::Session;
use crate::traits::{PlannerSource, UpdateAck};


static UMBRELLA_DETAIL_QUERY: &str = r#"
    query umbrellaDetail($id: Int!) {
      umbrellas(id: [$id]) {
        ID
        title
        from
        to
        description
        needsTutors
        type {
          name
        }
        location {
          name
        }
      }
    }
"#;

static UPDATE_EVENT_MUTATION: &str = r#"
    mutation updateEvent($id: Int!, $event: updateEvent!) {
      updateEvent(id: $id, event: $event) {
        ID
      }
    }
"#;


#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Deserialize)]
struct UmbrellaDetail {
    umbrellas: Vec<Event>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateEventData {
    update_event: UpdatedEvent,
}

#[derive(Deserialize)]
struct UpdatedEvent {
    #[serde(rename = "ID")]
    id: EventId,
}


/// A planner source that talks to a GraphQL server
pub struct Client {
    url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;

        Ok(Self{
            url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the endpoint set in [`crate::config::API_URL`]
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        Self::new(crate::config::get(&crate::config::API_URL))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send a GraphQL document and return its `data` part.
    /// Requests that are given a session are authenticated with its ID.
    async fn request<T: DeserializeOwned>(&self, document: &str, variables: serde_json::Value, session: Option<&Session>) -> Result<T, Box<dyn Error>> {
        let mut builder = self.http
            .post(self.url.clone())
            .json(&GraphQLRequest{ query: document, variables });
        if let Some(session) = session {
            builder = builder.bearer_auth(session.sid());
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}: {}", status, text).into());
        }
        log::trace!("GraphQL response: {}", text);

        let body: GraphQLResponse<T> = serde_json::from_str(&text)?;
        if body.errors.is_empty() == false {
            let messages: Vec<&str> = body.errors.iter().map(|err| err.message.as_str()).collect();
            return Err(format!("The server returned errors: {}", messages.join("; ")).into());
        }
        match body.data {
            None => Err("The server returned no data".into()),
            Some(data) => Ok(data),
        }
    }
}

#[async_trait]
impl PlannerSource for Client {
    async fn fetch_umbrella_by_id(&self, id: EventId) -> Result<Vec<Event>, Box<dyn Error>> {
        log::debug!("Fetching umbrella {} from {}", id, self.url);
        let detail: UmbrellaDetail = self.request(UMBRELLA_DETAIL_QUERY, json!({ "id": id }), None).await?;
        Ok(detail.umbrellas)
    }

    async fn update_event(&self, id: EventId, event: &EventInput, session: &Session) -> Result<UpdateAck, Box<dyn Error>> {
        log::debug!("Updating event {} on {}", id, self.url);
        let variables = json!({
            "id": id,
            "event": event,
        });
        let data: UpdateEventData = self.request(UPDATE_EVENT_MUTATION, variables, Some(session)).await?;
        if data.update_event.id != id {
            log::warn!("Updated event {} but the server acknowledged event {}", id, data.update_event.id);
        }
        Ok(UpdateAck{ id: data.update_event.id })
    }
}
