#![allow(dead_code)]

pub mod dns_server_mock;
pub mod messages;
pub mod recording_transport;

pub use dns_server_mock::MockDnsServer;
pub use recording_transport::RecordingTransport;
