//! DNS Message Builder
//!
//! Constructs query messages in wire format using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use origin_relay_domain::DomainError;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `domain` carrying transaction `id`.
    pub fn build_query_with_id(
        id: u16,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::MalformedMessage(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::MalformedMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
