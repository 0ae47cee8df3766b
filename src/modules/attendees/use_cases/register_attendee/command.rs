// Validated registration input.
//
// Values are carried exactly as the caller sent them: trimming and lower-casing
// happen when the registry builds the record.

use crate::modules::attendees::core::attendee::TicketType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeInput {
    pub name: String,
    pub email: String,
    pub ticket_type: Option<TicketType>,
}
