// In memory implementation of the AttendeeRegistry port.
//
// Responsibilities
// - Hold the seeded event catalog (read only).
// - Store attendees by id and by (event id, normalized email).
// - Run the duplicate check and both inserts under a single lock.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::attendees::adapters::outbound::registry::AttendeeRegistry;
use crate::modules::attendees::core::attendee::{Attendee, AttendeeStatus, normalize_email};
use crate::modules::attendees::core::event::Event;
use crate::modules::attendees::use_cases::register_attendee::command::AttendeeInput;
use crate::modules::attendees::use_cases::register_attendee::decision::RegistrationError;

type EmailKey = (String, String);

#[derive(Default)]
struct Attendees {
    by_id: HashMap<String, Attendee>,
    by_email: HashMap<EmailKey, String>,
}

pub struct InMemoryAttendeeRegistry {
    events: HashMap<String, Event>,
    attendees: Mutex<Attendees>,
}

impl InMemoryAttendeeRegistry {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().map(|e| (e.id.clone(), e)).collect(),
            attendees: Mutex::new(Attendees::default()),
        }
    }

    pub fn with_seeded_events() -> Self {
        Self::new(Event::seeded())
    }

    pub async fn len(&self) -> usize {
        self.attendees.lock().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AttendeeRegistry for InMemoryAttendeeRegistry {
    async fn register(
        &self,
        event_id: &str,
        input: AttendeeInput,
    ) -> Result<Attendee, RegistrationError> {
        if !self.events.contains_key(event_id) {
            return Err(RegistrationError::EventNotFound);
        }

        let name = input.name.trim();
        if name.is_empty() {
            return Err(RegistrationError::InvalidName);
        }

        let email = normalize_email(&input.email);
        let key = (event_id.to_string(), email.clone());

        let mut attendees = self.attendees.lock().await;
        if attendees.by_email.contains_key(&key) {
            return Err(RegistrationError::DuplicateAttendee);
        }

        let now = Utc::now();
        let attendee = Attendee {
            id: Uuid::now_v7().to_string(),
            event_id: event_id.to_string(),
            name: name.to_string(),
            email,
            ticket_type: input.ticket_type.unwrap_or_default(),
            status: AttendeeStatus::Registered,
            check_in_at: None,
            created_at: now,
            updated_at: now,
        };

        attendees.by_email.insert(key, attendee.id.clone());
        attendees
            .by_id
            .insert(attendee.id.clone(), attendee.clone());
        Ok(attendee)
    }

    async fn find(&self, attendee_id: &str) -> Option<Attendee> {
        self.attendees.lock().await.by_id.get(attendee_id).cloned()
    }

    fn event(&self, event_id: &str) -> Option<Event> {
        self.events.get(event_id).cloned()
    }
}
