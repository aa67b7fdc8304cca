use crate::utils::error::{CheckError, Result};
use std::net::{IpAddr, Ipv6Addr};

/// Splits input text into targets: one per non-blank line, trimmed,
/// order and duplicates kept. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_targets(content: &str) -> Vec<String> {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a single host address. Networks (`10.0.0.0/24`), ranges and
/// anything else that is not exactly one IPv4/IPv6 address are rejected.
/// IPv6 may carry a non-empty zone (`fe80::1%eth0`); the zone is dropped
/// from the returned address.
pub fn parse_target(candidate: &str) -> Result<IpAddr> {
    let invalid = || CheckError::InvalidTarget {
        value: candidate.to_string(),
    };

    if candidate.contains('/') {
        return Err(invalid());
    }

    match candidate.split_once('%') {
        Some((addr, zone)) => {
            if zone.is_empty() || zone.contains('%') {
                return Err(invalid());
            }
            addr.parse::<Ipv6Addr>()
                .map(IpAddr::V6)
                .map_err(|_| invalid())
        }
        None => candidate.parse::<IpAddr>().map_err(|_| invalid()),
    }
}

pub fn is_valid_ip(candidate: &str) -> bool {
    parse_target(candidate).is_ok()
}
