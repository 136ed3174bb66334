//! Error types for network construction and query parsing

use crate::graph::HostId;

/// Broad failure categories used for logging and for callers that only care
/// about the class of a failure.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Invalid argument or an operation invoked in the wrong phase.
    Precondition,
    /// A router identity could not be resolved uniquely.
    UnresolvedIdentity,
    /// Clustering produced an inconsistent partition.
    Consistency,
    /// A malformed address token.
    Parse,
}

impl ErrorKind {
    /// Stable identifier for log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "PRECONDITION",
            Self::UnresolvedIdentity => "UNRESOLVED_IDENTITY",
            Self::Consistency => "CONSISTENCY",
            Self::Parse => "PARSE",
        }
    }
}

/// Errors raised while building the network or parsing queries.
///
/// A query that finds no route is not an error; see
/// [`Distance::NotFound`](crate::router::resolver::Distance::NotFound).
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum NetworkError {
    #[error("cannot create {requested} clusters from {hosts} hosts")]
    InvalidClusterCount { requested: usize, hosts: usize },

    #[error("{operation} requires {requires} to be built first")]
    OutOfOrder {
        operation: &'static str,
        requires: &'static str,
    },

    #[error("{phase} has already been built")]
    AlreadyBuilt { phase: &'static str },

    #[error("no router has gateway identity {gateway}")]
    UnknownRouter { gateway: HostId },

    #[error("gateway identity {gateway} is shared by clusters {first} and {second}")]
    DuplicateGateway {
        gateway: HostId,
        first: usize,
        second: usize,
    },

    #[error("host edges exhausted with {components} components left, target was {target}")]
    UnderPartitioned { components: usize, target: usize },

    #[error("host {host} was not reached by any cluster traversal")]
    UnvisitedHost { host: HostId },

    #[error("cluster {cluster} has no members")]
    EmptyCluster { cluster: usize },

    #[error("malformed address {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl NetworkError {
    /// Category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidClusterCount { .. }
            | Self::OutOfOrder { .. }
            | Self::AlreadyBuilt { .. } => ErrorKind::Precondition,
            Self::UnknownRouter { .. } | Self::DuplicateGateway { .. } => {
                ErrorKind::UnresolvedIdentity
            }
            Self::UnderPartitioned { .. }
            | Self::UnvisitedHost { .. }
            | Self::EmptyCluster { .. } => ErrorKind::Consistency,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = NetworkError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NetworkError::InvalidClusterCount { requested: 0, hosts: 4 }, ErrorKind::Precondition)]
    #[case(NetworkError::AlreadyBuilt { phase: "host graph" }, ErrorKind::Precondition)]
    #[case(NetworkError::UnknownRouter { gateway: 7 }, ErrorKind::UnresolvedIdentity)]
    #[case(NetworkError::UnderPartitioned { components: 3, target: 2 }, ErrorKind::Consistency)]
    #[case(NetworkError::UnvisitedHost { host: 9 }, ErrorKind::Consistency)]
    #[case(NetworkError::parse("1.2", "missing separator"), ErrorKind::Parse)]
    fn errors_map_to_kinds(#[case] err: NetworkError, #[case] kind: ErrorKind) {
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = NetworkError::InvalidClusterCount {
            requested: 5,
            hosts: 4,
        };
        assert_eq!(err.to_string(), "cannot create 5 clusters from 4 hosts");
        assert_eq!(err.kind().as_str(), "PRECONDITION");
    }
}
