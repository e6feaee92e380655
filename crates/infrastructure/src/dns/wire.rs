//! Byte-level editing of DNS messages (RFC 1035 §4.1, RFC 6891, RFC 7871).
//!
//! The forwarding path only ever touches a handful of header bits, the answer
//! TTLs and the OPT record, so these helpers patch the packed message in place
//! instead of round-tripping it through a full decoder. Anything they cannot
//! walk is reported as `None` and left to the caller.

pub const HEADER_LEN: usize = 12;

const TYPE_OPT: u16 = 41;
const EDNS_OPTION_CLIENT_SUBNET: u16 = 8;

const FLAG_QR: u8 = 0x80;
const MASK_OPCODE: u8 = 0x78;
const FLAG_RD: u8 = 0x01;
const FLAG_CD: u8 = 0x10;

pub mod rcode {
    pub const NO_ERROR: u8 = 0;
    pub const FORM_ERR: u8 = 1;
    pub const SERV_FAIL: u8 = 2;
    pub const NOT_IMP: u8 = 4;
}

pub mod opcode {
    pub const QUERY: u8 = 0;
    pub const IQUERY: u8 = 1;
}

#[inline]
fn read_u16(buf: &[u8], pos: usize) -> Option<u16> {
    buf.get(pos..pos + 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

#[inline]
fn write_u16(buf: &mut [u8], pos: usize, value: u16) {
    buf[pos..pos + 2].copy_from_slice(&value.to_be_bytes());
}

pub fn message_id(buf: &[u8]) -> Option<u16> {
    read_u16(buf, 0)
}

pub fn opcode(buf: &[u8]) -> Option<u8> {
    buf.get(2).map(|b| (b & MASK_OPCODE) >> 3)
}

pub fn response_code(buf: &[u8]) -> Option<u8> {
    buf.get(3).map(|b| b & 0x0F)
}

struct Counts {
    questions: u16,
    answers: u16,
    authority: u16,
    additional: u16,
}

fn counts(buf: &[u8]) -> Option<Counts> {
    Some(Counts {
        questions: read_u16(buf, 4)?,
        answers: read_u16(buf, 6)?,
        authority: read_u16(buf, 8)?,
        additional: read_u16(buf, 10)?,
    })
}

fn skip_name(buf: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        let len = *buf.get(pos)?;
        match len & 0xC0 {
            0x00 if len == 0 => return Some(pos + 1),
            0x00 => pos += 1 + len as usize,
            0xC0 => {
                buf.get(pos + 1)?;
                return Some(pos + 2);
            }
            _ => return None,
        }
    }
}

/// Offset of the first byte after the question section.
pub fn question_end(buf: &[u8]) -> Option<usize> {
    let counts = counts(buf)?;
    let mut pos = HEADER_LEN;
    for _ in 0..counts.questions {
        pos = skip_name(buf, pos)? + 4;
        if pos > buf.len() {
            return None;
        }
    }
    Some(pos)
}

struct RecordSpan {
    start: usize,
    rtype: u16,
    ttl_pos: usize,
    rdata_pos: usize,
    end: usize,
}

fn record_at(buf: &[u8], pos: usize) -> Option<RecordSpan> {
    let name_end = skip_name(buf, pos)?;
    let rtype = read_u16(buf, name_end)?;
    let rdlen = read_u16(buf, name_end + 8)? as usize;
    let rdata_pos = name_end + 10;
    let end = rdata_pos + rdlen;
    if end > buf.len() {
        return None;
    }
    Some(RecordSpan {
        start: pos,
        rtype,
        ttl_pos: name_end + 4,
        rdata_pos,
        end,
    })
}

/// Sets the TTL of every answer-section record to `ttl`.
///
/// Returns the number of records rewritten.
pub fn rewrite_answer_ttls(buf: &mut [u8], ttl: u32) -> Option<usize> {
    let answers = counts(buf)?.answers;
    let mut pos = question_end(buf)?;
    for _ in 0..answers {
        let record = record_at(buf, pos)?;
        buf[record.ttl_pos..record.ttl_pos + 4].copy_from_slice(&ttl.to_be_bytes());
        pos = record.end;
    }
    Some(answers as usize)
}

/// Copies the transaction id, RD and CD bits of `query` into `response`.
pub fn prepare_reply(response: &mut [u8], query: &[u8]) {
    if response.len() < HEADER_LEN || query.len() < HEADER_LEN {
        return;
    }
    response[0..2].copy_from_slice(&query[0..2]);
    response[2] = (response[2] & !FLAG_RD) | (query[2] & FLAG_RD);
    response[3] = (response[3] & !FLAG_CD) | (query[3] & FLAG_CD);
}

/// Removes every EDNS Client Subnet option from the OPT record.
///
/// If no other option remains the OPT record itself is dropped. Returns
/// `None` when the message carries no client subnet option.
pub fn strip_client_subnet(buf: &[u8]) -> Option<Vec<u8>> {
    let counts = counts(buf)?;
    let mut pos = question_end(buf)?;
    for _ in 0..(counts.answers as u32 + counts.authority as u32) {
        pos = record_at(buf, pos)?.end;
    }

    for _ in 0..counts.additional {
        let record = record_at(buf, pos)?;
        if record.rtype != TYPE_OPT {
            pos = record.end;
            continue;
        }

        let kept = without_client_subnet(&buf[record.rdata_pos..record.end])?;

        let mut out = Vec::with_capacity(buf.len());
        out.extend_from_slice(&buf[..record.start]);
        if kept.is_empty() {
            write_u16(&mut out, 10, counts.additional - 1);
        } else {
            out.extend_from_slice(&buf[record.start..record.rdata_pos - 2]);
            out.extend_from_slice(&(kept.len() as u16).to_be_bytes());
            out.extend_from_slice(&kept);
        }
        out.extend_from_slice(&buf[record.end..]);
        return Some(out);
    }

    None
}

/// Returns the OPT rdata minus client subnet options, or `None` if there were none.
fn without_client_subnet(rdata: &[u8]) -> Option<Vec<u8>> {
    let mut kept = Vec::with_capacity(rdata.len());
    let mut removed = false;
    let mut pos = 0;

    while pos < rdata.len() {
        let code = read_u16(rdata, pos)?;
        let len = read_u16(rdata, pos + 2)? as usize;
        let end = pos + 4 + len;
        if end > rdata.len() {
            return None;
        }
        if code == EDNS_OPTION_CLIENT_SUBNET {
            removed = true;
        } else {
            kept.extend_from_slice(&rdata[pos..end]);
        }
        pos = end;
    }

    removed.then_some(kept)
}

/// Builds a header-only reply to `query` carrying `rcode`.
///
/// The question section is echoed when it can be walked. Returns `None` for
/// buffers too short to hold a header.
pub fn build_error_reply(query: &[u8], rcode: u8) -> Option<Vec<u8>> {
    if query.len() < HEADER_LEN {
        return None;
    }

    let question = question_end(query).map(|end| &query[HEADER_LEN..end]);

    let mut reply = Vec::with_capacity(HEADER_LEN + question.map_or(0, <[u8]>::len));
    reply.extend_from_slice(&query[0..2]);
    reply.push(FLAG_QR | (query[2] & MASK_OPCODE) | (query[2] & FLAG_RD));
    reply.push((query[3] & FLAG_CD) | (rcode & 0x0F));
    match question {
        Some(q) => {
            reply.extend_from_slice(&query[4..6]);
            reply.extend_from_slice(&[0; 6]);
            reply.extend_from_slice(q);
        }
        None => reply.extend_from_slice(&[0; 8]),
    }
    Some(reply)
}
