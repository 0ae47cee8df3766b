use crate::modules::attendees::adapters::outbound::registry::AttendeeRegistry;
use crate::modules::attendees::use_cases::register_attendee::handler::RegisterAttendeeHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn AttendeeRegistry>,
    pub register_handler: Arc<RegisterAttendeeHandler<dyn AttendeeRegistry>>,
}

impl AppState {
    /// The handler and the queries share the one registry instance.
    pub fn new(registry: Arc<dyn AttendeeRegistry>) -> Self {
        Self {
            register_handler: Arc::new(RegisterAttendeeHandler::new(registry.clone())),
            registry,
        }
    }
}
