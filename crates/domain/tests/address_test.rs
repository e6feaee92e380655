use origin_relay_domain::{canonicalize, Address};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

#[test]
fn test_canonicalize_ipv4_with_port() {
    let addr = canonicalize("10.0.0.5:41234");
    assert_eq!(addr.ip(), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))));
}

#[test]
fn test_canonicalize_bracketed_ipv6_with_port() {
    let addr = canonicalize("[2001:db8::53]:5300");
    assert_eq!(addr.ip(), Some("2001:db8::53".parse().unwrap()));
}

#[test]
fn test_canonicalize_mapped_ipv4_collapses() {
    let addr = canonicalize("[::ffff:10.0.0.5]:53");
    assert_eq!(addr, Address::parse("10.0.0.5").unwrap());
}

#[test]
fn test_canonicalize_bare_ipv6_literal_is_not_truncated() {
    let addr = canonicalize("2001:db8::1");
    assert_eq!(addr.ip(), Some("2001:db8::1".parse().unwrap()));
}

#[test]
fn test_canonicalize_garbage_yields_zero_value() {
    assert!(canonicalize("not-an-address:53").is_zero());
    assert!(canonicalize("").is_zero());
    assert!(canonicalize("[2001:db8::1").is_zero());
}

/// The DNS listener hands the engine `SocketAddr::to_string()`; every shape
/// that formatting produces must round-trip to the bare IP.
#[test]
fn test_canonicalize_accepts_socket_addr_display_format() {
    let samples: [SocketAddr; 3] = [
        "192.0.2.1:53".parse().unwrap(),
        "[2001:db8::7]:53".parse().unwrap(),
        SocketAddr::new(
            IpAddr::V6(Ipv4Addr::new(198, 51, 100, 9).to_ipv6_mapped()),
            40000,
        ),
    ];

    assert_eq!(
        canonicalize(&samples[0].to_string()).ip(),
        Some(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
    );
    assert_eq!(
        canonicalize(&samples[1].to_string()).ip(),
        Some("2001:db8::7".parse().unwrap())
    );
    assert_eq!(
        canonicalize(&samples[2].to_string()).ip(),
        Some(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 9)))
    );
}

#[test]
fn test_parse_rejects_port() {
    assert!(Address::parse("10.0.0.5:53").is_err());
}

#[test]
fn test_parse_and_canonicalize_agree_on_mapped_addresses() {
    let from_api = Address::parse("::ffff:192.168.1.10").unwrap();
    let from_wire = canonicalize("[::ffff:192.168.1.10]:1053");
    assert_eq!(from_api, from_wire);
    assert_eq!(from_api.to_string(), "192.168.1.10");
}

#[test]
fn test_native_ipv6_is_kept() {
    let addr = Address::from_ip(IpAddr::V6(Ipv6Addr::LOCALHOST));
    assert_eq!(addr.to_string(), "::1");
}
