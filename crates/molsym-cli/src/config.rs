//! Layered CLI configuration: command-line flags override `-S key=value`
//! settings, which override the TOML config file, which overrides built-in
//! defaults.

pub mod builder;
mod defaults;
mod file;
pub mod models;
