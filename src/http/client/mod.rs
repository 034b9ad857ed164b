pub mod hyper_client;

pub use hyper_client::{ConnectionPool, HyperClient};
