//! Council service transport adapters

mod http;

pub use http::HttpCouncilTransport;
