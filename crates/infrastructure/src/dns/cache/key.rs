use hickory_proto::op::Query;
use origin_relay_domain::fingerprint::FINGERPRINT_LEN;
use origin_relay_domain::{Fingerprint, UpstreamEndpoint};
use sha1::{Digest, Sha1};

/// Cache key for a query forwarded to `upstream`.
///
/// Hashes `"<upstream>|<name> <class> <type>;..."` over the questions in
/// message order. Names are hashed as sent, so `Example.COM` and `example.com`
/// are distinct keys.
pub fn fingerprint(upstream: &UpstreamEndpoint, queries: &[Query]) -> Fingerprint {
    let mut hasher = Sha1::new();
    hasher.update(upstream.to_string().as_bytes());
    hasher.update(b"|");
    for query in queries {
        hasher.update(
            format!(
                "{} {} {};",
                query.name(),
                query.query_class(),
                query.query_type()
            )
            .as_bytes(),
        );
    }

    let mut digest = [0u8; FINGERPRINT_LEN];
    digest.copy_from_slice(&hasher.finalize());
    Fingerprint::from_digest(digest)
}
