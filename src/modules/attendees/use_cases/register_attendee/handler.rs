use serde_json::Value;
use std::sync::Arc;

use crate::modules::attendees::adapters::outbound::registry::AttendeeRegistry;
use crate::modules::attendees::core::attendee::Attendee;
use crate::modules::attendees::use_cases::register_attendee::decision::RegistrationError;
use crate::modules::attendees::use_cases::register_attendee::validate::validate;

pub struct RegisterAttendeeHandler<TRegistry>
where
    TRegistry: AttendeeRegistry + ?Sized + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> RegisterAttendeeHandler<TRegistry>
where
    TRegistry: AttendeeRegistry + ?Sized + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        event_id: &str,
        payload: &Value,
    ) -> Result<Attendee, RegistrationError> {
        // An unknown event wins over a malformed body.
        if self.registry.event(event_id).is_none() {
            tracing::warn!(event_id, "registration rejected: event not found");
            return Err(RegistrationError::EventNotFound);
        }

        let input = validate(payload).map_err(|details| {
            tracing::debug!(event_id, %details, "registration payload rejected");
            RegistrationError::ValidationFailed(details)
        })?;

        match self.registry.register(event_id, input).await {
            Ok(attendee) => {
                tracing::info!(
                    attendee_id = %attendee.id,
                    event_id,
                    ticket_type = attendee.ticket_type.as_str(),
                    "attendee registered"
                );
                Ok(attendee)
            }
            Err(error) => {
                tracing::warn!(event_id, %error, "registration rejected");
                Err(error)
            }
        }
    }
}
