//! HTTP surface of the agent: the local liveness endpoint.

pub mod server;

pub use server::LivenessServer;
