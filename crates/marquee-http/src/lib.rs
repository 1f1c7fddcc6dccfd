mod client;

pub use client::{HttpDataSource, HttpSourceError, USER_AGENT};
