// Composition root for the attendance service.
//
// - Read config from the environment.
// - Instantiate the in-memory registry and wire it into the use case handlers.
// - Build the HTTP router (REST, GraphQL, static assets).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
