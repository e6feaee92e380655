use hickory_proto::op::{Message, ResponseCode};
use origin_relay_domain::DomainError;

/// Summary of an upstream response that decoded cleanly.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub response_code: ResponseCode,
    pub answer_ttls: Vec<u32>,
}

impl ParsedResponse {
    pub fn is_success(&self) -> bool {
        self.response_code == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        Ok(ParsedResponse {
            response_code: message.response_code(),
            answer_ttls: message.answers().iter().map(|r| r.ttl()).collect(),
        })
    }
}
