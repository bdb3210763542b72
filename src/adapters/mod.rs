//! Adapters - Implementations of ports and the HTTP surface.

pub mod candidates;
pub mod http;
pub mod narrative;
