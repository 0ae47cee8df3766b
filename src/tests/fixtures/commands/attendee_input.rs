use crate::modules::attendees::core::attendee::TicketType;
use crate::modules::attendees::use_cases::register_attendee::command::AttendeeInput;

pub struct AttendeeInputBuilder {
    inner: AttendeeInput,
}

impl Default for AttendeeInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AttendeeInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: AttendeeInput {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ticket_type: None,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn ticket_type(mut self, v: TicketType) -> Self {
        self.inner.ticket_type = Some(v);
        self
    }

    pub fn build(self) -> AttendeeInput {
        self.inner
    }
}
