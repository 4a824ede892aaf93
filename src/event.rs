//! Planner events ("umbrellas")

use serde::{Deserialize, Deserializer, Serialize};
use chrono::NaiveDate;

/// The numeric identifier of an event, as assigned by the server
pub type EventId = i64;

/// A named object the server attaches to an event (its type, its location...)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// An umbrella event, i.e. a top-level course under which sub-events are organized.
///
/// `id`, `title`, `from` and `to` are required in server responses. Every other field falls back to its default value when the server omits it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "ID")]
    id: EventId,
    #[serde(deserialize_with = "non_empty")]
    title: String,
    /// First day of the event (inclusive)
    #[serde(with = "date_format")]
    from: NaiveDate,
    /// Last day of the event (inclusive)
    #[serde(with = "date_format")]
    to: NaiveDate,

    #[serde(default)]
    description: String,
    #[serde(default)]
    needs_tutors: bool,
    #[serde(default, rename = "type")]
    event_type: Option<Label>,
    #[serde(default)]
    location: Option<Label>,
}

impl Event {
    /// Create an event with default values for every optional field
    pub fn new<T: ToString>(id: EventId, title: T, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            id,
            title: title.to_string(),
            from,
            to,
            description: String::new(),
            needs_tutors: false,
            event_type: None,
            location: None,
        }
    }

    pub fn id(&self) -> EventId { self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn from(&self) -> NaiveDate { self.from }
    pub fn to(&self) -> NaiveDate { self.to }
    pub fn description(&self) -> &str { &self.description }
    pub fn needs_tutors(&self) -> bool { self.needs_tutors }
    pub fn event_type(&self) -> Option<&str> { self.event_type.as_ref().map(|l| l.name.as_str()) }
    pub fn location(&self) -> Option<&str> { self.location.as_ref().map(|l| l.name.as_str()) }

    pub fn set_title<T: ToString>(&mut self, title: T) {
        self.title = title.to_string();
    }

    pub fn set_range(&mut self, from: NaiveDate, to: NaiveDate) {
        self.from = from;
        self.to = to;
    }

    /// Build the update that renames this event, keeping its current dates
    pub fn rename_input<T: ToString>(&self, new_title: T) -> EventInput {
        EventInput {
            title: new_title.to_string(),
            needs_tutors: false,
            from: self.from,
            to: self.to,
        }
    }

    /// Build the update that moves this event to another date range, keeping its current title
    pub fn range_input(&self, from: NaiveDate, to: NaiveDate) -> EventInput {
        EventInput {
            title: self.title.clone(),
            needs_tutors: false,
            from,
            to,
        }
    }

    /// Whether `(from, to)` is a different range than the current one
    pub fn range_differs(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.from != from || self.to != to
    }
}



/// The payload of an `updateEvent` mutation.
///
/// The server replaces every field it is given, so this always carries a full set of values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    /// Not editable from here, but required by the server schema
    pub needs_tutors: bool,
    #[serde(with = "date_format")]
    pub from: NaiveDate,
    #[serde(with = "date_format")]
    pub to: NaiveDate,
}


fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("event title must not be empty"));
    }
    Ok(s)
}

/// Dates are written as RFC 3339 timestamps at midnight UTC.
/// Both timestamps and plain `YYYY-MM-DD` dates are accepted when reading.
pub(crate) mod date_format {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<NaiveDate, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_local().date());
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|err| format!("Invalid date {:?}: {}", s, err))
    }
}



#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn partial_response_gets_defaults() {
        let json = r#"{"ID": 42, "title": "Vorkurs 2024", "from": "2024-01-01T00:00:00Z", "to": "2024-01-10T00:00:00Z"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event, Event::new(42, "Vorkurs 2024", date(2024, 1, 1), date(2024, 1, 10)));
        assert_eq!(event.description(), "");
        assert_eq!(event.needs_tutors(), false);
        assert_eq!(event.event_type(), None);
    }

    #[test]
    fn full_response() {
        let json = r#"{
            "ID": 7, "title": "Vorkurs", "from": "2024-01-01", "to": "2024-01-10T12:30:00+01:00",
            "description": "Mathe", "needsTutors": true,
            "type": {"name": "Vorlesung"}, "location": {"name": "Hörsaal 1"}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.to(), date(2024, 1, 10));
        assert_eq!(event.description(), "Mathe");
        assert!(event.needs_tutors());
        assert_eq!(event.event_type(), Some("Vorlesung"));
        assert_eq!(event.location(), Some("Hörsaal 1"));
    }

    #[test]
    fn invalid_responses_are_rejected() {
        let missing_dates = r#"{"ID": 42, "title": "Vorkurs"}"#;
        assert!(serde_json::from_str::<Event>(missing_dates).is_err());

        let empty_title = r#"{"ID": 42, "title": "", "from": "2024-01-01", "to": "2024-01-02"}"#;
        assert!(serde_json::from_str::<Event>(empty_title).is_err());

        let bad_date = r#"{"ID": 42, "title": "Vorkurs", "from": "01/01/2024", "to": "2024-01-02"}"#;
        assert!(serde_json::from_str::<Event>(bad_date).is_err());
    }

    #[test]
    fn inputs_keep_unchanged_fields() {
        let event = Event::new(42, "Vorkurs 2024", date(2024, 1, 1), date(2024, 1, 10));

        let rename = event.rename_input("Sommerkurs");
        assert_eq!(rename, EventInput {
            title: "Sommerkurs".to_string(),
            needs_tutors: false,
            from: date(2024, 1, 1),
            to: date(2024, 1, 10),
        });

        let moved = event.range_input(date(2024, 2, 1), date(2024, 2, 15));
        assert_eq!(moved.title, "Vorkurs 2024");
        assert_eq!(moved.from, date(2024, 2, 1));
        assert_eq!(moved.to, date(2024, 2, 15));
    }

    #[test]
    fn input_wire_format() {
        let event = Event::new(42, "Vorkurs 2024", date(2024, 1, 1), date(2024, 1, 10));
        let value = serde_json::to_value(event.rename_input("Sommerkurs")).unwrap();
        assert_eq!(value, serde_json::json!({
            "title": "Sommerkurs",
            "needsTutors": false,
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-01-10T00:00:00Z",
        }));
    }

    #[test]
    fn range_comparison_is_by_value() {
        let event = Event::new(1, "A", date(2024, 1, 1), date(2024, 1, 10));
        assert!(!event.range_differs(date(2024, 1, 1), date(2024, 1, 10)));
        assert!(event.range_differs(date(2024, 1, 1), date(2024, 1, 11)));
        assert!(event.range_differs(date(2023, 12, 31), date(2024, 1, 10)));
    }
}
