use async_graphql::{ErrorExtensions, SimpleObject};

use crate::modules::attendees::core::attendee::{format_timestamp, Attendee};
use crate::modules::attendees::core::event::Event;
use crate::modules::attendees::use_cases::register_attendee::decision::RegistrationError;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Attendee")]
pub struct GqlAttendee {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub ticket_type: String,
    pub status: String,
    pub check_in_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Attendee> for GqlAttendee {
    fn from(a: Attendee) -> Self {
        Self {
            id: a.id,
            event_id: a.event_id,
            name: a.name,
            email: a.email,
            ticket_type: a.ticket_type.as_str().to_string(),
            status: a.status.as_str().to_string(),
            check_in_at: a.check_in_at.as_ref().map(format_timestamp),
            created_at: format_timestamp(&a.created_at),
            updated_at: format_timestamp(&a.updated_at),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    pub id: String,
    pub name: String,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
        }
    }
}

impl ErrorExtensions for RegistrationError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.code());
            let details = self
                .details()
                .and_then(|d| serde_json::to_value(d).ok())
                .and_then(|v| async_graphql::Value::from_json(v).ok());
            if let Some(details) = details {
                extensions.set("details", details);
            }
        })
    }
}
