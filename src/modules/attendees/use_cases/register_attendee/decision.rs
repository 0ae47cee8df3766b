use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to the messages collected for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Repeated messages for the same field are kept once.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let messages = self.0.entry(field.into()).or_default();
        let message = message.into();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, failures) in errors.field_errors() {
            for failure in failures.iter() {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "{}", fields.join(", "))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("event not found")]
    EventNotFound,

    #[error("validation error")]
    ValidationFailed(FieldErrors),

    #[error("name is required")]
    InvalidName,

    #[error("attendee already exists for this event")]
    DuplicateAttendee,
}

impl RegistrationError {
    /// Client-facing error kind shared by every inbound adapter.
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::EventNotFound => "NotFound",
            RegistrationError::ValidationFailed(_) | RegistrationError::InvalidName => "BadRequest",
            RegistrationError::DuplicateAttendee => "Conflict",
        }
    }

    pub fn details(&self) -> Option<&FieldErrors> {
        match self {
            RegistrationError::ValidationFailed(details) => Some(details),
            _ => None,
        }
    }
}
