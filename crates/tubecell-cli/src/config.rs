//! Layered configuration: built-in defaults, then the TOML file, then `--set` overrides, then
//! dedicated command-line flags.

mod builder;
mod file;

pub use builder::{build_config, build_lattice};
