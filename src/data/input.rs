//! Line-oriented network description reader
//!
//! Layout, blank lines ignored:
//!
//! ```text
//! <host link count n>
//! <host> <host> <latency>      (n lines)
//! <cluster count k>
//! <router link count m>
//! <gateway> <gateway> <latency> (m lines)
//! <router>.<host> <router>.<host>   (one query per remaining line)
//! ```

use crate::graph::{HostId, Weight};
use anyhow::{anyhow, bail, Context, Result};
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// A parsed network description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInput {
    pub host_links: Vec<(HostId, HostId, Weight)>,
    pub cluster_count: usize,
    pub router_links: Vec<(HostId, HostId, Weight)>,
    pub queries: Vec<String>,
}

/// Non-blank lines with their 1-based line numbers
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        self.next()
            .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let (line_no, line) = self.next_line(what)?;
        line.trim()
            .parse()
            .map_err(|_| anyhow!("line {line_no}: expected {what}, found {line:?}"))
    }

    fn links(&mut self, count: usize, what: &str) -> Result<Vec<(HostId, HostId, Weight)>> {
        let mut links = Vec::with_capacity(count);
        for _ in 0..count {
            let (line_no, line) = self.next_line(what)?;
            links.push(parse_link(line).with_context(|| format!("line {line_no}: bad {what}"))?);
        }
        Ok(links)
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(|(i, line)| (i + 1, line))
            .find(|(_, line)| !line.trim().is_empty())
    }
}

fn parse_link(line: &str) -> Result<(HostId, HostId, Weight)> {
    let fields = line
        .split_whitespace()
        .map(str::parse::<u64>)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("{line:?} has a non-numeric field"))?;

    match fields.as_slice() {
        &[a, b, weight] => Ok((a, b, weight)),
        _ => bail!("{line:?} should have exactly three fields"),
    }
}

/// Parse a complete network description
pub fn parse_network_input(text: &str) -> Result<NetworkInput> {
    let mut lines = Lines::new(text);

    let host_link_count: usize = lines.number("host link count")?;
    let host_links = lines.links(host_link_count, "host link")?;
    let cluster_count = lines.number("cluster count")?;
    let router_link_count: usize = lines.number("router link count")?;
    let router_links = lines.links(router_link_count, "router link")?;
    let queries = lines.map(|(_, line)| line.trim().to_owned()).collect();

    Ok(NetworkInput {
        host_links,
        cluster_count,
        router_links,
        queries,
    })
}

/// Read a network description from a file, or stdin when `path` is `None`
pub fn load_network_input(path: Option<&Path>) -> Result<NetworkInput> {
    let text = match path {
        Some(path) => {
            log::info!("Reading network description: {}", path.display());
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            log::info!("Reading network description from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };

    parse_network_input(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "4
1 2 1
2 3 2

3 4 1
1 4 5
2
1
2 4 7
2.1 4.3
2.1 4.99
";

    #[test]
    fn parses_all_sections() {
        let input = parse_network_input(SAMPLE).unwrap();
        assert_eq!(input.host_links, vec![(1, 2, 1), (2, 3, 2), (3, 4, 1), (1, 4, 5)]);
        assert_eq!(input.cluster_count, 2);
        assert_eq!(input.router_links, vec![(2, 4, 7)]);
        assert_eq!(input.queries, vec!["2.1 4.3", "2.1 4.99"]);
    }

    #[test]
    fn no_queries_is_fine() {
        let input = parse_network_input("1\n1 2 3\n1\n0\n").unwrap();
        assert!(input.router_links.is_empty());
        assert!(input.queries.is_empty());
    }

    #[test]
    fn bad_link_reports_line_number() {
        let err = parse_network_input("2\n1 2 3\n1 x 3\n1\n0\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 3"), "{err:#}");
    }

    #[test]
    fn short_input_is_an_error() {
        let err = parse_network_input("3\n1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn link_needs_three_fields() {
        assert!(parse_link("1 2").is_err());
        assert!(parse_link("1 2 3 4").is_err());
        assert_eq!(parse_link(" 7  8 9 ").unwrap(), (7, 8, 9));
    }
}
