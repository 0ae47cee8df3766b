use serde::{Deserialize, Serialize};

/// An event attendees register against. Events are seeded at startup and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
}

impl Event {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The catalog the service starts with.
    pub fn seeded() -> Vec<Event> {
        vec![Event::new("e1", "Sample Event")]
    }
}
