//! Forwarding of `/api/*` requests to the production API

pub mod handler;
pub mod headers;
pub mod target;
