// netcfg-api: Async Rust client for the netcfg network/hotspot REST backend

pub mod client;
pub mod connectivity;
pub mod error;
pub mod hotspot;
pub mod interfaces;
pub mod models;
pub mod sink;
pub mod transport;

pub use client::NetcfgClient;
pub use error::Error;
pub use sink::{LogKind, LogSink, NoopSink};
pub use transport::TransportConfig;
