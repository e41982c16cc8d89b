//! Ports - interfaces the application layer needs implemented by
//! infrastructure adapters.

pub mod model_backend;
pub mod transport;
