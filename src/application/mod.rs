//! Application layer - command handlers wiring ports to the domain core.

pub mod handlers;
