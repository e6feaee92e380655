use hickory_proto::rr::RecordType;
use origin_relay_infrastructure::dns::forwarding::MessageBuilder;
use origin_relay_infrastructure::dns::wire;

pub const MOCK_ANSWER: [u8; 4] = [93, 184, 216, 34];
pub const MOCK_TTL: u32 = 60;

pub const ECS_OPTION: [u8; 11] = [0x00, 0x08, 0x00, 0x07, 0x00, 0x01, 0x18, 0x00, 10, 0, 0];
pub const COOKIE_OPTION: [u8; 12] = [0x00, 0x0A, 0x00, 0x08, 1, 2, 3, 4, 5, 6, 7, 8];

pub fn a_query(id: u16, domain: &str) -> Vec<u8> {
    MessageBuilder::build_query_with_id(id, domain, RecordType::A).unwrap()
}

/// Appends an OPT record carrying `options` to a query without one.
pub fn with_opt(mut query: Vec<u8>, options: &[u8]) -> Vec<u8> {
    query.extend_from_slice(&[0x00, 0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00]);
    query.extend_from_slice(&(options.len() as u16).to_be_bytes());
    query.extend_from_slice(options);
    let arcount = u16::from_be_bytes([query[10], query[11]]) + 1;
    query[10..12].copy_from_slice(&arcount.to_be_bytes());
    query
}

pub fn additional_count(message: &[u8]) -> u16 {
    u16::from_be_bytes([message[10], message[11]])
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Answers `query` with one A record (or none when `rcode` is not 0).
pub fn a_response(query: &[u8], ttl: u32, rcode: u8) -> Vec<u8> {
    let question_end = wire::question_end(query).unwrap_or(12);
    let answers: u16 = if rcode == 0 { 1 } else { 0 };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(0x80 | (query[2] & 0x79));
    response.push(0x80 | (rcode & 0x0F));
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&answers.to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..question_end]);

    if answers == 1 {
        response.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&MOCK_ANSWER);
    }
    response
}
