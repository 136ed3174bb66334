//! Two-tier host/router network: clusters hosts behind gateway routers and
//! answers shortest-path queries between addressed hosts.

pub mod address;
pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod network;
pub mod router;
pub mod storage;

pub use address::{Address, RouteQuery};
pub use config::Config;
pub use error::{ErrorKind, NetworkError};
pub use network::{Network, NetworkSummary};
pub use router::Distance;
