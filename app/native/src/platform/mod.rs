//! Platform helpers shared across the host.

pub mod path;
