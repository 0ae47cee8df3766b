pub mod modules {
    pub mod attendees {
        pub mod core {
            pub mod attendee;
            pub mod event;
        }
        pub mod use_cases {
            pub mod register_attendee {
                pub mod command;
                pub mod decision;
                pub mod handler;
                pub mod validate;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod find_attendee {
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod registry;
                pub mod registry_in_memory;
            }
        }
    }
}

pub mod shell;
