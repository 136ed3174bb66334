//! Parsing of `router.host` addresses and route queries

use crate::error::NetworkError;
use crate::graph::HostId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A host addressed through the gateway of its cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub router: HostId,
    pub host: HostId,
}

fn parse_field(input: &str, field: &str, name: &str) -> Result<HostId, NetworkError> {
    field
        .parse()
        .map_err(|_| NetworkError::parse(input, format!("{name} {field:?} is not a number")))
}

impl FromStr for Address {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (router, host) = s
            .split_once('.')
            .ok_or_else(|| NetworkError::parse(s, "missing '.' separator"))?;

        Ok(Self {
            router: parse_field(s, router, "router")?,
            host: parse_field(s, host, "host")?,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.router, self.host)
    }
}

/// Source and destination of a route query, written `"r.h r.h"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteQuery {
    pub source: Address,
    pub dest: Address,
}

impl FromStr for RouteQuery {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (source, dest) = trimmed
            .split_once(' ')
            .ok_or_else(|| NetworkError::parse(s, "missing ' ' between addresses"))?;

        Ok(Self {
            source: source.parse()?,
            dest: dest.parse()?,
        })
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_four_fields() {
        let query: RouteQuery = "123.456 128.192".parse().unwrap();
        assert_eq!(
            query,
            RouteQuery {
                source: Address {
                    router: 123,
                    host: 456
                },
                dest: Address {
                    router: 128,
                    host: 192
                },
            }
        );
        assert_eq!(query.to_string(), "123.456 128.192");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let query: RouteQuery = "  2.1 4.3\n".parse().unwrap();
        assert_eq!(query.dest.host, 3);
    }

    #[rstest]
    #[case("2.1")]
    #[case("2 4.3")]
    #[case("2.1 4")]
    #[case("a.1 4.3")]
    #[case("2.1 4.x")]
    #[case("2.1.5 4.3")]
    #[case("2.1  4.3")]
    #[case("-2.1 4.3")]
    #[case("")]
    fn malformed_queries_fail(#[case] input: &str) {
        let err = input.parse::<RouteQuery>().unwrap_err();
        assert!(matches!(err, NetworkError::Parse { .. }), "{input:?} gave {err:?}");
    }
}
