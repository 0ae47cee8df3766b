// Schema check for an untyped registration payload.
//
// Shape (object, presence, string type) is checked by hand; the value constraints
// go through `validator`. Failures are collected per field and returned as a value.

use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::modules::attendees::core::attendee::TicketType;
use crate::modules::attendees::use_cases::register_attendee::command::AttendeeInput;
use crate::modules::attendees::use_cases::register_attendee::decision::FieldErrors;

/// Key used for errors that concern the payload as a whole.
pub const FORM_FIELD: &str = "_form";

const INVALID_EMAIL: &str = "invalid email format";
const INVALID_TICKET_TYPE: &str = "Invalid enum value. Expected 'standard' | 'vip' | 'student'";

#[derive(Debug, Validate)]
struct NameConstraints {
    #[validate(length(min = 1, message = "name is required"))]
    name: String,
}

#[derive(Debug, Validate)]
struct EmailConstraints {
    // Surrounding whitespace is tolerated here and stripped by normalization.
    #[validate(email(message = "invalid email format"), custom(function = "dotted_domain"))]
    email: String,
}

/// `validator`'s email rule accepts single-label domains such as `localhost`.
fn dotted_domain(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() && !domain.contains('.') => {
            Err(ValidationError::new("email_domain").with_message(Cow::Borrowed(INVALID_EMAIL)))
        }
        _ => Ok(()),
    }
}

pub fn validate(input: &Value) -> Result<AttendeeInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let Some(object) = input.as_object() else {
        errors.add(FORM_FIELD, "Expected object");
        return Err(errors);
    };

    let name = required_string(object, "name", &mut errors);
    let email = required_string(object, "email", &mut errors);
    let ticket_type = optional_ticket_type(object, &mut errors);

    if let Some(name) = &name {
        let constraints = NameConstraints { name: name.clone() };
        collect(constraints.validate(), "name", &mut errors);
    }
    if let Some(email) = &email {
        let constraints = EmailConstraints {
            email: email.trim().to_string(),
        };
        collect(constraints.validate(), "email", &mut errors);
    }

    match (name, email, ticket_type) {
        (Some(name), Some(email), Ok(ticket_type)) if errors.is_empty() => Ok(AttendeeInput {
            name,
            email,
            ticket_type,
        }),
        _ => Err(errors),
    }
}

fn collect(
    result: Result<(), validator::ValidationErrors>,
    field: &'static str,
    errors: &mut FieldErrors,
) {
    if let Err(failures) = result {
        let failures = FieldErrors::from(&failures);
        for message in failures.get(field).unwrap_or_default() {
            errors.add(field, message.clone());
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, "Required");
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.add(field, "Expected string");
            None
        }
    }
}

fn optional_ticket_type(
    object: &Map<String, Value>,
    errors: &mut FieldErrors,
) -> Result<Option<TicketType>, ()> {
    let field = "ticketType";
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => serde_json::from_value::<TicketType>(raw.clone())
            .map(Some)
            .map_err(|_| errors.add(field, INVALID_TICKET_TYPE)),
    }
}
