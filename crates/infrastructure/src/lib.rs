//! Origin Relay Infrastructure Layer
pub mod dns;
pub mod repositories;
pub mod table;
