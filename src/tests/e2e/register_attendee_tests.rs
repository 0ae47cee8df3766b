use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::attendees::adapters::outbound::registry::AttendeeRegistry;
use crate::modules::attendees::adapters::outbound::registry_in_memory::InMemoryAttendeeRegistry;
use crate::modules::attendees::core::event::Event;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::payloads::attendee_payload::AttendeePayloadBuilder;

fn make_app() -> (Arc<InMemoryAttendeeRegistry>, Router) {
    let registry = Arc::new(InMemoryAttendeeRegistry::new([
        Event::new("e1", "Sample Event"),
        Event::new("e2", "Second Event"),
    ]));
    let app = router(AppState::new(registry.clone()), "missing-web-dir");
    (registry, app)
}

async fn register(app: &Router, event_id: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/events/{event_id}/attendees"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn accepts_exactly_one_of_two_equivalent_emails_in_either_order() {
    for (first, second) in [
        ("A@Example.com ", "a@example.com"),
        ("a@example.com", "A@Example.com "),
    ] {
        let (registry, app) = make_app();

        let (status, _) = register(&app, "e1", AttendeePayloadBuilder::new().email(first).build()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            register(&app, "e1", AttendeePayloadBuilder::new().email(second).build()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Conflict");

        assert_eq!(registry.len().await, 1);
    }
}

#[tokio::test]
async fn accepts_one_of_two_concurrent_equivalent_registrations() {
    let (registry, app) = make_app();

    let (first, second) = tokio::join!(
        register(&app, "e1", AttendeePayloadBuilder::new().email("ada@example.com").build()),
        register(&app, "e1", AttendeePayloadBuilder::new().email(" ADA@example.com").build()),
    );

    let mut statuses = [first.0.as_u16(), second.0.as_u16()];
    statuses.sort();
    assert_eq!(statuses, [201, 409]);
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn defaults_the_ticket_type_to_standard() {
    let (_, app) = make_app();
    let (status, body) = register(&app, "e1", AttendeePayloadBuilder::new().build()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ticketType"], "standard");
}

#[tokio::test]
async fn leaves_the_registry_untouched_for_an_unknown_event() {
    let (registry, app) = make_app();
    let (status, body) = register(&app, "nope", AttendeePayloadBuilder::new().build()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn reports_an_unknown_event_before_validating_the_payload() {
    let (registry, app) = make_app();
    let (status, body) = register(&app, "nope", json!({ "name": "", "email": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
    assert!(body.get("details").is_none());
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn rejects_a_blank_name() {
    let (registry, app) = make_app();
    let (status, body) = register(&app, "e1", AttendeePayloadBuilder::new().name("   ").build()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn registers_the_same_email_on_different_events() {
    let (registry, app) = make_app();
    let (first_status, first) = register(&app, "e1", AttendeePayloadBuilder::new().build()).await;
    let (second_status, second) = register(&app, "e2", AttendeePayloadBuilder::new().build()).await;

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::CREATED);
    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["eventId"], "e1");
    assert_eq!(second["eventId"], "e2");
    assert_eq!(registry.len().await, 2);
}

#[tokio::test]
async fn returns_the_full_record_on_success() {
    let (registry, app) = make_app();
    let (status, body) = register(
        &app,
        "e1",
        AttendeePayloadBuilder::new().ticket_type("student").build(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let reserialized: Value = serde_json::from_str(&body.to_string()).unwrap();
    let object = reserialized.as_object().unwrap();
    for key in [
        "id",
        "eventId",
        "name",
        "email",
        "ticketType",
        "status",
        "checkInAt",
        "createdAt",
        "updatedAt",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(reserialized["status"], "registered");
    assert!(reserialized["checkInAt"].is_null());
    assert_eq!(reserialized["ticketType"], "student");

    // ISO-8601 UTC with exactly three fractional digits, e.g. 2024-05-01T12:00:00.123Z
    let created_at = reserialized["createdAt"].as_str().unwrap();
    let (_, fraction) = created_at.rsplit_once('.').expect("no fractional seconds");
    assert_eq!(fraction.len(), 4);
    assert!(fraction.ends_with('Z'));

    let id = reserialized["id"].as_str().unwrap();
    let stored = registry.find(id).await.expect("attendee not stored");
    assert_eq!(serde_json::to_value(stored).unwrap(), reserialized);
}
