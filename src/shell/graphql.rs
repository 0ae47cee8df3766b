use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::attendees::use_cases::find_attendee::inbound::graphql::QueryRoot;
pub use crate::modules::attendees::use_cases::register_attendee::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
