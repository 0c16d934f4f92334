//! Command line front-end for the `tagline` generator.
//!
//! The binary reads generator settings and metadata records as JSON and
//! prints one tag line per record. Modules are public so the pieces can be
//! reused and tested independently of the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
