use async_graphql::{Context, Object};

use crate::modules::attendees::adapters::inbound::graphql::{GqlAttendee, GqlEvent};
use crate::modules::attendees::adapters::outbound::registry::AttendeeRegistry;
use crate::shell::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn health(&self) -> &'static str {
        "ok"
    }

    async fn attendee(&self, context: &Context<'_>, id: String) -> Option<GqlAttendee> {
        let state = context.data_unchecked::<AppState>();
        state.registry.find(&id).await.map(Into::into)
    }

    async fn event(&self, context: &Context<'_>, id: String) -> Option<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        state.registry.event(&id).map(Into::into)
    }
}
