pub mod engine;
pub mod message_builder;
pub mod response_parser;

pub use engine::{ForwardingEngine, ForwardingSettings};
pub use message_builder::MessageBuilder;
pub use response_parser::{ParsedResponse, ResponseParser};
