//! HTTP surface of greeting-server.

pub mod greeting;
