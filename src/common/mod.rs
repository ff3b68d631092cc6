pub mod api {
    pub mod models {
        pub mod channel;
        pub mod common;
        pub mod search;
        pub mod video;
    }
    pub mod client;
    pub mod error;
    pub mod provider;
}

pub mod logger;
pub mod models;
