//! Input handling for the command-line front end

pub mod input;

pub use input::{load_network_input, parse_network_input, NetworkInput};
