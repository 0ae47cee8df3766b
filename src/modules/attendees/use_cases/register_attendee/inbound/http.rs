use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::modules::attendees::use_cases::register_attendee::decision::{
    FieldErrors, RegistrationError,
};
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

fn status_for(error: &RegistrationError) -> StatusCode {
    match error {
        RegistrationError::EventNotFound => StatusCode::NOT_FOUND,
        RegistrationError::ValidationFailed(_) | RegistrationError::InvalidName => {
            StatusCode::BAD_REQUEST
        }
        RegistrationError::DuplicateAttendee => StatusCode::CONFLICT,
    }
}

fn error_response(error: &RegistrationError) -> Response {
    let body = ErrorBody {
        error: error.code(),
        message: error.to_string(),
        details: error.details().cloned(),
    };
    (status_for(error), Json(body)).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rejection) => {
            let body = ErrorBody {
                error: "BadRequest",
                message: rejection.body_text(),
                details: None,
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match state.register_handler.handle(&event_id, &payload).await {
        Ok(attendee) => (StatusCode::CREATED, Json(attendee)).into_response(),
        Err(error) => error_response(&error),
    }
}
