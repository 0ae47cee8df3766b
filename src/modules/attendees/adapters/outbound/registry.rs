use async_trait::async_trait;

use crate::modules::attendees::core::attendee::Attendee;
use crate::modules::attendees::core::event::Event;
use crate::modules::attendees::use_cases::register_attendee::command::AttendeeInput;
use crate::modules::attendees::use_cases::register_attendee::decision::RegistrationError;

/// Owner of every attendee record.
///
/// `register` must check the `(event id, normalized email)` key and insert the
/// record as one atomic step, whatever the backing store.
#[async_trait]
pub trait AttendeeRegistry: Send + Sync {
    async fn register(
        &self,
        event_id: &str,
        input: AttendeeInput,
    ) -> Result<Attendee, RegistrationError>;

    async fn find(&self, attendee_id: &str) -> Option<Attendee>;

    fn event(&self, event_id: &str) -> Option<Event>;
}
