//! Outbound network boundary: the suggestion service client.

pub mod suggestion;
