//! CLI command implementations

pub mod info;
pub mod roundtrip;
pub mod validate;
