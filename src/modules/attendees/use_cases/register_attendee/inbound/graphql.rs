use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result as GqlResult};
use serde::Serialize;

use crate::modules::attendees::adapters::inbound::graphql::GqlAttendee;
use crate::shell::state::AppState;

// Serialized back into the HTTP payload shape so both front doors share one validator.
#[derive(InputObject, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAttendeeInput {
    pub name: String,
    pub email: String,
    pub ticket_type: Option<String>,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register_attendee(
        &self,
        context: &Context<'_>,
        event_id: String,
        input: RegisterAttendeeInput,
    ) -> GqlResult<GqlAttendee> {
        let state = context.data_unchecked::<AppState>();
        let payload =
            serde_json::to_value(&input).map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let attendee = state
            .register_handler
            .handle(&event_id, &payload)
            .await
            .map_err(|e| e.extend())?;

        Ok(attendee.into())
    }
}
