pub mod shared {
    pub mod core {
        pub mod calendar;
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod notification_outbox;
    }
}

pub mod modules {
    pub mod clinic_tracking {
        pub mod core {
            pub mod booking;
            pub mod intents;
            pub mod invariants;
            pub mod participants;
            pub mod resolve;
            pub mod status;
            pub mod transitions;
        }
        pub mod use_cases {
            pub mod update_tracking_status {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_daily_board {
                pub mod handler;
                pub mod projection;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_walkin_booking {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod booking_store;
                pub mod booking_store_in_memory;
                pub mod directory;
                pub mod directory_in_memory;
                pub mod notification_outbox;
            }
        }
    }
}

pub mod shell;
