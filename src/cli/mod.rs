//! Command-line front end for the `ugraph` binary.

pub mod commands;

pub use commands::{cmd_distance, cmd_info, cmd_traverse, resolve, EdgeSpec, GraphInput};
